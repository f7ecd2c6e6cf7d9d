//! Test fixtures and constants.

use out_of_ink::models::{SourceDocument, SourcePage};
use std::path::Path;

/// Grey paper (200,200,200) with a pure cyan square in the middle.
pub const CYAN_MARK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
  <rect x="0" y="0" width="20" height="10" fill="#c8c8c8"/>
  <rect x="8" y="3" width="4" height="4" fill="#00ffff"/>
</svg>"##;

/// White page with a pure magenta bar along the bottom.
pub const MAGENTA_BAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
  <rect x="0" y="0" width="20" height="10" fill="#ffffff"/>
  <rect x="0" y="6" width="20" height="4" fill="#ff00ff"/>
</svg>"##;

/// Document with `pages` placeholder SVG pages named 1.svg, 2.svg, ...
pub fn document(pages: usize) -> SourceDocument {
    let pages = (1..=pages)
        .map(|i| SourcePage::svg(format!("{i}.svg"), CYAN_MARK_SVG))
        .collect();
    SourceDocument::new("fixture", pages).unwrap()
}

/// Write a two-page SVG document into `dir`, pages named so that sorting
/// by file name gives cyan-mark first.
pub fn write_svg_document(dir: &Path) {
    std::fs::write(dir.join("page-01.svg"), CYAN_MARK_SVG).unwrap();
    std::fs::write(dir.join("page-02.svg"), MAGENTA_BAR_SVG).unwrap();
}
