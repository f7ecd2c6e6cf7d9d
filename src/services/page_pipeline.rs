use crate::error::PipelineError;
use crate::models::SourceDocument;
use crate::services::{DocumentWriter, PageRasterizer};
use ink_remap::{ChannelMapping, InkCorrector, RasterBuffer};

/// Lifecycle of a [`PagePipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No document loaded
    Idle,
    /// Document loaded, nothing in progress
    Ready,
    /// A corrected page preview has been produced
    Previewing,
    /// Export running
    Exporting,
}

/// Uncorrected and corrected renderings of one page at scale 1.
#[derive(Debug, Clone)]
pub struct Preview {
    pub source: RasterBuffer,
    pub corrected: RasterBuffer,
    /// 1-based page number
    pub page: usize,
    pub page_count: usize,
}

/// Export progress, reported after each finished page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProgress {
    pub page: usize,
    pub total: usize,
}

impl ExportProgress {
    pub fn is_last(&self) -> bool {
        self.page == self.total
    }
}

/// Drives pages of a document through rasterize -> correct -> write.
///
/// Export is strictly sequential and all-or-nothing: a failure on any page
/// abandons the output document without finalizing it.
pub struct PagePipeline<R: PageRasterizer> {
    rasterizer: R,
    document: Option<SourceDocument>,
    state: PipelineState,
    last_failed_page: Option<usize>,
    parallel: bool,
}

impl<R: PageRasterizer> PagePipeline<R> {
    pub fn new(rasterizer: R) -> Self {
        Self {
            rasterizer,
            document: None,
            state: PipelineState::Idle,
            last_failed_page: None,
            parallel: true,
        }
    }

    /// Enable or disable per-pixel parallelism during correction.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn document(&self) -> Option<&SourceDocument> {
        self.document.as_ref()
    }

    /// Page count of the loaded document, 0 when idle.
    pub fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map(|doc| self.rasterizer.page_count(doc))
            .unwrap_or(0)
    }

    /// Page that made the most recent preview or export fail.
    pub fn last_failed_page(&self) -> Option<usize> {
        self.last_failed_page
    }

    /// Load a document, replacing any previous one.
    pub fn load(&mut self, document: SourceDocument) -> Result<usize, PipelineError> {
        let count = self.rasterizer.page_count(&document);
        if count == 0 {
            return Err(PipelineError::EmptyDocument);
        }

        tracing::info!(document = %document.name(), pages = count, "Loaded document");

        self.document = Some(document);
        self.state = PipelineState::Ready;
        self.last_failed_page = None;
        Ok(count)
    }

    pub fn unload(&mut self) {
        self.document = None;
        self.state = PipelineState::Idle;
        self.last_failed_page = None;
    }

    /// Rasterize `page` at scale 1 and return it with a corrected copy.
    pub async fn preview(
        &mut self,
        page: usize,
        mapping: &ChannelMapping,
    ) -> Result<Preview, PipelineError> {
        let page_count = self.check_page(page)?;

        match self.render_preview(page, page_count, mapping).await {
            Ok(preview) => {
                self.state = PipelineState::Previewing;
                self.last_failed_page = None;
                Ok(preview)
            }
            Err(e) => {
                tracing::warn!(%e, page, "Preview failed");
                self.state = PipelineState::Ready;
                self.last_failed_page = e.page();
                Err(e)
            }
        }
    }

    async fn render_preview(
        &self,
        page: usize,
        page_count: usize,
        mapping: &ChannelMapping,
    ) -> Result<Preview, PipelineError> {
        let source = self.rasterize(page, 1).await?;
        let corrected = self.correct(page, source.clone(), mapping).await?;

        tracing::debug!(page, mapping = %mapping, "Rendered preview");

        Ok(Preview {
            source,
            corrected,
            page,
            page_count,
        })
    }

    /// Correct every page at `quality` and assemble them with `writer`.
    ///
    /// Returns the finalized document bytes. `on_progress` is called once
    /// per page, in page order.
    pub async fn export<W: DocumentWriter>(
        &mut self,
        writer: &W,
        mapping: &ChannelMapping,
        quality: u32,
        mut on_progress: impl FnMut(ExportProgress),
    ) -> Result<Vec<u8>, PipelineError> {
        if quality == 0 {
            return Err(PipelineError::InvalidQuality(quality));
        }
        let total = self.page_count();
        if self.document.is_none() {
            return Err(PipelineError::NoDocument);
        }

        tracing::info!(pages = total, quality, mapping = %mapping, "Starting export");
        self.state = PipelineState::Exporting;
        self.last_failed_page = None;

        let result = self
            .run_export(writer, mapping, quality, total, &mut on_progress)
            .await;

        self.state = PipelineState::Ready;
        match &result {
            Ok(bytes) => {
                tracing::info!(pages = total, bytes = bytes.len(), "Export complete");
            }
            Err(e) => {
                self.last_failed_page = e.page();
                tracing::error!(%e, page = ?e.page(), "Export failed");
            }
        }
        result
    }

    async fn run_export<W: DocumentWriter>(
        &self,
        writer: &W,
        mapping: &ChannelMapping,
        quality: u32,
        total: usize,
        on_progress: &mut impl FnMut(ExportProgress),
    ) -> Result<Vec<u8>, PipelineError> {
        let mut output = writer
            .begin_document()
            .await
            .map_err(PipelineError::Begin)?;

        for page in 1..=total {
            let raster = self.rasterize(page, quality).await?;
            let corrected = self.correct(page, raster, mapping).await?;

            let width = corrected.width() as f32 / quality as f32;
            let height = corrected.height() as f32 / quality as f32;
            writer
                .add_page(&mut output, &corrected, width, height)
                .await
                .map_err(|source| PipelineError::Encode { page, source })?;

            tracing::debug!(
                page,
                total,
                width = corrected.width(),
                height = corrected.height(),
                "Page exported"
            );
            on_progress(ExportProgress { page, total });
        }

        writer
            .finalize(output)
            .await
            .map_err(PipelineError::Finalize)
    }

    fn check_page(&self, page: usize) -> Result<usize, PipelineError> {
        if self.document.is_none() {
            return Err(PipelineError::NoDocument);
        }
        let count = self.page_count();
        if page == 0 || page > count {
            return Err(PipelineError::InvalidPage { page, count });
        }
        Ok(count)
    }

    async fn rasterize(&self, page: usize, scale: u32) -> Result<RasterBuffer, PipelineError> {
        let document = self.document.as_ref().ok_or(PipelineError::NoDocument)?;
        self.rasterizer
            .rasterize(document, page, scale)
            .await
            .map_err(|source| PipelineError::Decode { page, source })
    }

    /// Run the correction on the blocking pool, handing the buffer over and
    /// back.
    async fn correct(
        &self,
        page: usize,
        mut buffer: RasterBuffer,
        mapping: &ChannelMapping,
    ) -> Result<RasterBuffer, PipelineError> {
        let corrector = InkCorrector::new(*mapping).parallel(self.parallel);

        tokio::task::spawn_blocking(move || {
            corrector.correct(&mut buffer);
            buffer
        })
        .await
        .map_err(|e| PipelineError::Correction {
            page,
            reason: e.to_string(),
        })
    }
}
