//! PDF document writer
//!
//! Each corrected page is embedded as a single Flate-compressed DeviceRGB
//! image XObject stretched over a page of the requested size.

use crate::error::EncodeError;
use crate::services::DocumentWriter;
use async_trait::async_trait;
use ink_remap::RasterBuffer;
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};

const COMPRESSION_LEVEL: u8 = 6;

/// Writes corrected pages as an image-only PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfDocumentWriter {
    /// Document title
    pub title: Option<String>,
}

impl PdfDocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// A compressed page waiting for the document to be finalized
#[derive(Debug)]
struct PdfPage {
    pixel_width: u32,
    pixel_height: u32,
    width_pt: f32,
    height_pt: f32,
    image_data: Vec<u8>,
}

/// In-progress PDF
#[derive(Debug, Default)]
pub struct PdfDocument {
    pages: Vec<PdfPage>,
}

impl PdfDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[async_trait]
impl DocumentWriter for PdfDocumentWriter {
    type Document = PdfDocument;

    async fn begin_document(&self) -> Result<PdfDocument, EncodeError> {
        Ok(PdfDocument::default())
    }

    async fn add_page(
        &self,
        document: &mut PdfDocument,
        page: &RasterBuffer,
        width: f32,
        height: f32,
    ) -> Result<(), EncodeError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(EncodeError::InvalidPageSize { width, height });
        }
        if page.is_empty() {
            return Err(EncodeError::EmptyImage {
                width: page.width(),
                height: page.height(),
            });
        }

        let rgb = page.to_rgb_bytes();
        let image_data = tokio::task::spawn_blocking(move || {
            compress_to_vec_zlib(&rgb, COMPRESSION_LEVEL)
        })
        .await
        .map_err(|e| EncodeError::Compression(e.to_string()))?;

        document.pages.push(PdfPage {
            pixel_width: page.width(),
            pixel_height: page.height(),
            width_pt: width,
            height_pt: height,
            image_data,
        });
        Ok(())
    }

    async fn finalize(&self, document: PdfDocument) -> Result<Vec<u8>, EncodeError> {
        generate_pdf(&document.pages, self.title.as_deref())
    }
}

fn generate_pdf(pages: &[PdfPage], title: Option<&str>) -> Result<Vec<u8>, EncodeError> {
    if pages.is_empty() {
        return Err(EncodeError::EmptyDocument);
    }

    let mut pdf = Pdf::new();

    // Catalog(1), Pages(2), then Page(3+i*3), Contents(4+i*3), XObject(5+i*3)
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let page_refs: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new((3 + i * 3) as i32))
        .collect();

    pdf.catalog(catalog_id).pages(pages_id);

    if let Some(title) = title {
        let info_id = Ref::new((3 + pages.len() * 3) as i32);
        pdf.document_info(info_id).title(TextStr(title));
    }

    pdf.pages(pages_id)
        .kids(page_refs.iter().copied())
        .count(pages.len() as i32);

    for (i, page) in pages.iter().enumerate() {
        let page_id = Ref::new((3 + i * 3) as i32);
        let contents_id = Ref::new((4 + i * 3) as i32);
        let image_id = Ref::new((5 + i * 3) as i32);
        write_page(&mut pdf, page, page_id, pages_id, contents_id, image_id);
    }

    Ok(pdf.finish())
}

fn write_page(
    pdf: &mut Pdf,
    page: &PdfPage,
    page_id: Ref,
    pages_id: Ref,
    contents_id: Ref,
    image_id: Ref,
) {
    let mut image = pdf.image_xobject(image_id, &page.image_data);
    image.filter(Filter::FlateDecode);
    image.width(page.pixel_width as i32);
    image.height(page.pixel_height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    // Unit image space scaled to the full page
    let mut content = Content::new();
    content.save_state();
    content.transform([page.width_pt, 0.0, 0.0, page.height_pt, 0.0, 0.0]);
    content.x_object(Name(b"Im0"));
    content.restore_state();
    pdf.stream(contents_id, &content.finish());

    let mut pdf_page = pdf.page(page_id);
    pdf_page.parent(pages_id);
    pdf_page.media_box(Rect::new(0.0, 0.0, page.width_pt, page.height_pt));
    pdf_page.contents(contents_id);
    pdf_page.resources().x_objects().pair(Name(b"Im0"), image_id);
    pdf_page.finish();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|w| *w == needle)
            .count()
    }

    #[tokio::test]
    async fn test_write_pdf_multi() {
        let writer = PdfDocumentWriter::with_title("Multi-page Test");
        let mut doc = writer.begin_document().await.unwrap();

        let first = RasterBuffer::filled(8, 4, [255, 0, 0, 255]);
        let second = RasterBuffer::filled(4, 8, [0, 0, 255, 255]);
        writer.add_page(&mut doc, &first, 2.0, 1.0).await.unwrap();
        writer.add_page(&mut doc, &second, 1.0, 2.0).await.unwrap();
        assert_eq!(doc.page_count(), 2);

        let bytes = writer.finalize(doc).await.unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/MediaBox"), 2);
        assert_eq!(count(&bytes, b"/Count 2"), 1);
        assert_eq!(count(&bytes, b"/Subtype /Image"), 2);
        assert_eq!(count(&bytes, b"Multi-page Test"), 1);
    }

    #[tokio::test]
    async fn test_finalize_empty_document() {
        let writer = PdfDocumentWriter::new();
        let doc = writer.begin_document().await.unwrap();
        assert!(matches!(
            writer.finalize(doc).await,
            Err(EncodeError::EmptyDocument)
        ));
    }

    #[tokio::test]
    async fn test_invalid_page_size() {
        let writer = PdfDocumentWriter::new();
        let mut doc = writer.begin_document().await.unwrap();
        let page = RasterBuffer::filled(2, 2, [0, 0, 0, 255]);

        assert!(matches!(
            writer.add_page(&mut doc, &page, 0.0, 2.0).await,
            Err(EncodeError::InvalidPageSize { .. })
        ));
        assert!(matches!(
            writer.add_page(&mut doc, &page, f32::NAN, 2.0).await,
            Err(EncodeError::InvalidPageSize { .. })
        ));
        assert_eq!(doc.page_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_image_rejected() {
        let writer = PdfDocumentWriter::new();
        let mut doc = writer.begin_document().await.unwrap();
        let page = RasterBuffer::filled(0, 0, [0, 0, 0, 255]);

        assert!(matches!(
            writer.add_page(&mut doc, &page, 1.0, 1.0).await,
            Err(EncodeError::EmptyImage { .. })
        ));
    }
}
