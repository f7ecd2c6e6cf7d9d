use crate::error::{DecodeError, EncodeError};
use crate::models::SourceDocument;
use async_trait::async_trait;
use ink_remap::RasterBuffer;

/// Turns pages of a source document into RGBA pixels.
#[async_trait]
pub trait PageRasterizer: Send + Sync {
    /// Number of pages the rasterizer will produce for `document`
    fn page_count(&self, document: &SourceDocument) -> usize {
        document.page_count()
    }

    /// Rasterize 1-based `page` at an integer `scale` (1 = intrinsic size).
    async fn rasterize(
        &self,
        document: &SourceDocument,
        page: usize,
        scale: u32,
    ) -> Result<RasterBuffer, DecodeError>;
}

/// Assembles corrected pages into an output document.
///
/// Pages are added in order; nothing is produced until [`finalize`] is
/// called, so dropping the handle abandons the document.
///
/// [`finalize`]: DocumentWriter::finalize
#[async_trait]
pub trait DocumentWriter: Send + Sync {
    /// In-progress document
    type Document: Send;

    async fn begin_document(&self) -> Result<Self::Document, EncodeError>;

    /// Append a page whose size in document units is `width` x `height`.
    async fn add_page(
        &self,
        document: &mut Self::Document,
        page: &RasterBuffer,
        width: f32,
        height: f32,
    ) -> Result<(), EncodeError>;

    async fn finalize(&self, document: Self::Document) -> Result<Vec<u8>, EncodeError>;
}
