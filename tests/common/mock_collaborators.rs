//! In-memory rasterizer and document writer that record every call.

use async_trait::async_trait;
use ink_remap::{RasterBuffer, Rgb};
use out_of_ink::error::{DecodeError, EncodeError};
use out_of_ink::models::SourceDocument;
use out_of_ink::services::{DocumentWriter, PageRasterizer};
use std::sync::{Arc, Mutex};

/// Produces page `p` at scale `s` as a `(p * s) x s` grey page whose last
/// pixel is pure cyan, so page sizes identify the page.
#[derive(Default)]
pub struct MockRasterizer {
    fail_on: Option<usize>,
    calls: Arc<Mutex<Vec<(usize, u32)>>>,
}

impl MockRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterizer that fails with an SVG parse error on `page`.
    pub fn failing_on(page: usize) -> Self {
        Self {
            fail_on: Some(page),
            ..Self::default()
        }
    }

    /// `(page, scale)` of every rasterize call, in call order.
    pub fn calls(&self) -> Vec<(usize, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageRasterizer for MockRasterizer {
    async fn rasterize(
        &self,
        document: &SourceDocument,
        page: usize,
        scale: u32,
    ) -> Result<RasterBuffer, DecodeError> {
        document.page(page)?;
        self.calls.lock().unwrap().push((page, scale));

        if self.fail_on == Some(page) {
            return Err(DecodeError::SvgParse("broken page".to_string()));
        }

        let width = page as u32 * scale;
        let height = scale;
        let mut buffer = RasterBuffer::filled(width, height, [200, 200, 200, 255]);
        buffer.set_pixel(width - 1, height - 1, Rgb::from_u8(0, 255, 255));
        Ok(buffer)
    }
}

/// One page as received by [`RecordingWriter`]
#[derive(Debug, Clone)]
pub struct RecordedPage {
    pub buffer: RasterBuffer,
    pub width: f32,
    pub height: f32,
}

/// Writer that keeps pages in memory and counts finalize calls.
///
/// The finalized "document" is one byte per page holding the page's pixel
/// width.
#[derive(Default, Clone)]
pub struct RecordingWriter {
    finalized: Arc<Mutex<Vec<Vec<RecordedPage>>>>,
    fail_on: Option<usize>,
    fail_begin: bool,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer that rejects the `page`-th added page.
    pub fn failing_on(page: usize) -> Self {
        Self {
            fail_on: Some(page),
            ..Self::default()
        }
    }

    /// Writer that cannot start a document.
    pub fn failing_begin() -> Self {
        Self {
            fail_begin: true,
            ..Self::default()
        }
    }

    /// Documents that reached `finalize`, in order.
    pub fn finalized(&self) -> Vec<Vec<RecordedPage>> {
        self.finalized.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentWriter for RecordingWriter {
    type Document = Vec<RecordedPage>;

    async fn begin_document(&self) -> Result<Self::Document, EncodeError> {
        if self.fail_begin {
            return Err(EncodeError::Compression("no space left".to_string()));
        }
        Ok(Vec::new())
    }

    async fn add_page(
        &self,
        document: &mut Self::Document,
        page: &RasterBuffer,
        width: f32,
        height: f32,
    ) -> Result<(), EncodeError> {
        if self.fail_on == Some(document.len() + 1) {
            return Err(EncodeError::InvalidPageSize { width, height });
        }
        document.push(RecordedPage {
            buffer: page.clone(),
            width,
            height,
        });
        Ok(())
    }

    async fn finalize(&self, document: Self::Document) -> Result<Vec<u8>, EncodeError> {
        if document.is_empty() {
            return Err(EncodeError::EmptyDocument);
        }
        let bytes = document.iter().map(|p| p.buffer.width() as u8).collect();
        self.finalized.lock().unwrap().push(document);
        Ok(bytes)
    }
}
