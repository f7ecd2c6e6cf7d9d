use crate::error::DecodeError;
use crate::models::{PageFormat, SourceDocument, SourcePage};
use crate::services::PageRasterizer;
use async_trait::async_trait;
use ink_remap::RasterBuffer;
use resvg::usvg::{self, Transform};
use std::sync::Arc;
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint};

/// Rasterizes SVG and PNG pages onto white paper.
///
/// SVG pages are rendered at their intrinsic size times the scale; PNG pages
/// are upscaled with nearest-neighbour sampling so that page pixels stay
/// crisp blocks.
#[derive(Clone)]
pub struct SvgRasterizer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRasterizer {
    /// Create a rasterizer using the system fonts
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::debug!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self::with_fontdb(fontdb)
    }

    pub fn with_fontdb(fontdb: fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Rasterize one encoded page synchronously.
    pub fn rasterize_page(&self, page: &SourcePage, scale: u32) -> Result<RasterBuffer, DecodeError> {
        if scale == 0 {
            return Err(DecodeError::InvalidScale(scale));
        }

        let pixmap = match page.format {
            PageFormat::Svg => self.rasterize_svg(&page.data, scale as f32)?,
            PageFormat::Png => rasterize_png(&page.data, scale as f32)?,
        };

        let (width, height) = (pixmap.width(), pixmap.height());
        // Opaque white underlay, so premultiplied bytes equal straight RGBA.
        Ok(RasterBuffer::new(width, height, pixmap.take())?)
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(&self, svg_data: &[u8], scale: f32) -> Result<Pixmap, DecodeError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| DecodeError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let width = (svg_size.width() * scale).ceil() as u32;
        let height = (svg_size.height() * scale).ceil() as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or(DecodeError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

fn rasterize_png(png_data: &[u8], scale: f32) -> Result<Pixmap, DecodeError> {
    let source = Pixmap::decode_png(png_data).map_err(|e| DecodeError::PngDecode(e.to_string()))?;

    let width = (source.width() as f32 * scale) as u32;
    let height = (source.height() as f32 * scale) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(DecodeError::PixmapAllocation)?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let paint = PixmapPaint {
        quality: FilterQuality::Nearest,
        ..Default::default()
    };
    pixmap.draw_pixmap(
        0,
        0,
        source.as_ref(),
        &paint,
        Transform::from_scale(scale, scale),
        None,
    );

    Ok(pixmap)
}

#[async_trait]
impl PageRasterizer for SvgRasterizer {
    async fn rasterize(
        &self,
        document: &SourceDocument,
        page: usize,
        scale: u32,
    ) -> Result<RasterBuffer, DecodeError> {
        let source = document.page(page)?.clone();
        let rasterizer = self.clone();

        tokio::task::spawn_blocking(move || rasterizer.rasterize_page(&source, scale))
            .await
            .map_err(|e| DecodeError::Task(e.to_string()))?
    }
}
