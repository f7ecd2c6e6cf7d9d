mod pdf;
mod png_encoder;
mod rasterizer;

pub use pdf::{PdfDocument, PdfDocumentWriter};
pub use png_encoder::encode_png;
pub use rasterizer::SvgRasterizer;
