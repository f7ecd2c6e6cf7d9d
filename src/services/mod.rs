pub mod interfaces;
pub mod page_pipeline;

pub use interfaces::{DocumentWriter, PageRasterizer};
pub use page_pipeline::{ExportProgress, PagePipeline, PipelineState, Preview};
