//! Custom assertion helpers for output documents.

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|w| *w == needle)
        .count()
}

/// Assert bytes are a PDF with exactly `pages` pages.
pub fn assert_pdf_with_pages(bytes: &[u8], pages: usize) {
    assert!(
        bytes.starts_with(b"%PDF-"),
        "Expected PDF header, got {:?}",
        &bytes[..bytes.len().min(8)]
    );
    assert_eq!(
        count_occurrences(bytes, b"/MediaBox"),
        pages,
        "Expected {pages} pages in PDF"
    );
    let count = format!("/Count {pages}");
    assert_eq!(count_occurrences(bytes, count.as_bytes()), 1);
}

/// Assert bytes are a PNG image.
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]),
        "Expected PNG magic bytes"
    );
}
