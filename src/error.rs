use ink_remap::RasterError;
use thiserror::Error;

/// A source page could not be turned into pixels.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Page {page} out of range (document has {count} pages)")]
    PageOutOfRange { page: usize, count: usize },

    #[error("Unsupported page format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid scale: {0}")]
    InvalidScale(u32),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    #[error("Rasterize task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A corrected page could not be written into the output document.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Invalid page size: {width}x{height} units")]
    InvalidPageSize { width: f32, height: f32 },

    #[error("Empty page image: {width}x{height} pixels")]
    EmptyImage { width: u32, height: u32 },

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Page compression failed: {0}")]
    Compression(String),
}

/// Failure of a preview or export run.
///
/// Every per-page variant carries the 1-based page number that failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No document loaded")]
    NoDocument,

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Page {page} out of range (document has {count} pages)")]
    InvalidPage { page: usize, count: usize },

    #[error("Invalid quality {0} (must be at least 1)")]
    InvalidQuality(u32),

    #[error("Failed to start document: {0}")]
    Begin(#[source] EncodeError),

    #[error("Failed to rasterize page {page}: {source}")]
    Decode {
        page: usize,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to correct page {page}: {reason}")]
    Correction { page: usize, reason: String },

    #[error("Failed to write page {page}: {source}")]
    Encode {
        page: usize,
        #[source]
        source: EncodeError,
    },

    #[error("Failed to finalize document: {0}")]
    Finalize(#[source] EncodeError),
}

impl PipelineError {
    /// The page this failure belongs to, if it is tied to one.
    pub fn page(&self) -> Option<usize> {
        match self {
            PipelineError::InvalidPage { page, .. }
            | PipelineError::Decode { page, .. }
            | PipelineError::Correction { page, .. }
            | PipelineError::Encode { page, .. } => Some(*page),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_page_out_of_range() {
        let error = DecodeError::PageOutOfRange { page: 4, count: 3 };
        assert_eq!(
            error.to_string(),
            "Page 4 out of range (document has 3 pages)"
        );
    }

    #[test]
    fn test_decode_error_svg_parse() {
        let error = DecodeError::SvgParse("Invalid XML".to_string());
        assert_eq!(error.to_string(), "SVG parse error: Invalid XML");
    }

    #[test]
    fn test_decode_error_pixmap_allocation() {
        let error = DecodeError::PixmapAllocation;
        assert_eq!(error.to_string(), "Failed to allocate pixmap");
    }

    #[test]
    fn test_encode_error_invalid_page_size() {
        let error = EncodeError::InvalidPageSize {
            width: 0.0,
            height: 792.0,
        };
        assert_eq!(error.to_string(), "Invalid page size: 0x792 units");
    }

    #[test]
    fn test_pipeline_error_decode_names_page() {
        let error = PipelineError::Decode {
            page: 2,
            source: DecodeError::SvgParse("bad".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Failed to rasterize page 2: SVG parse error: bad"
        );
        assert_eq!(error.page(), Some(2));
    }

    #[test]
    fn test_pipeline_error_encode_names_page() {
        let error = PipelineError::Encode {
            page: 7,
            source: EncodeError::EmptyImage {
                width: 0,
                height: 10,
            },
        };
        assert_eq!(
            error.to_string(),
            "Failed to write page 7: Empty page image: 0x10 pixels"
        );
        assert_eq!(error.page(), Some(7));
    }

    #[test]
    fn test_pipeline_error_without_page() {
        assert_eq!(PipelineError::NoDocument.page(), None);
        assert_eq!(
            PipelineError::Finalize(EncodeError::EmptyDocument).page(),
            None
        );
    }

    #[test]
    fn test_pipeline_error_begin_and_quality() {
        let error = PipelineError::Begin(EncodeError::PngEncode("disk full".to_string()));
        assert_eq!(
            error.to_string(),
            "Failed to start document: PNG encode error: disk full"
        );
        assert_eq!(error.page(), None);
        assert_eq!(
            PipelineError::InvalidQuality(0).to_string(),
            "Invalid quality 0 (must be at least 1)"
        );
    }
}
