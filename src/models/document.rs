use crate::error::DecodeError;
use std::path::Path;

/// Encoding of a single source page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Svg,
    Png,
}

impl PageFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// One page of a source document, still encoded.
#[derive(Debug, Clone)]
pub struct SourcePage {
    pub name: String,
    pub format: PageFormat,
    pub data: Vec<u8>,
}

impl SourcePage {
    pub fn svg(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            format: PageFormat::Svg,
            data: data.into(),
        }
    }

    pub fn png(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            format: PageFormat::Png,
            data: data.into(),
        }
    }
}

/// An ordered set of pages to be corrected.
///
/// Either a single `.svg`/`.png` file (one page) or a directory whose
/// `.svg`/`.png` entries, sorted by file name, are the pages.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    name: String,
    pages: Vec<SourcePage>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, pages: Vec<SourcePage>) -> Result<Self, DecodeError> {
        if pages.is_empty() {
            return Err(DecodeError::EmptyDocument);
        }
        Ok(Self {
            name: name.into(),
            pages,
        })
    }

    /// Read a document from a file or directory.
    pub async fn open(path: &Path) -> Result<Self, DecodeError> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_dir() {
            let format = PageFormat::from_path(path)
                .ok_or_else(|| DecodeError::UnsupportedFormat(path.display().to_string()))?;
            let data = tokio::fs::read(path).await?;
            let page = SourcePage {
                name: file_name(path),
                format,
                data,
            };
            tracing::info!(document = %name, pages = 1, "Opened document");
            return Self::new(name, vec![page]);
        }

        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(path).await?;
        while let Some(entry) = dir.next_entry().await? {
            let entry_path = entry.path();
            let is_file = entry.file_type().await?.is_file();
            match PageFormat::from_path(&entry_path) {
                Some(format) if is_file => entries.push((entry_path, format)),
                _ => tracing::debug!(path = %entry_path.display(), "Skipping non-page entry"),
            }
        }
        entries.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));

        let mut pages = Vec::with_capacity(entries.len());
        for (entry_path, format) in entries {
            let data = tokio::fs::read(&entry_path).await?;
            pages.push(SourcePage {
                name: file_name(&entry_path),
                format,
                data,
            });
        }

        tracing::info!(document = %name, pages = pages.len(), "Opened document");
        Self::new(name, pages)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pages(&self) -> &[SourcePage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page by 1-based number.
    pub fn page(&self, number: usize) -> Result<&SourcePage, DecodeError> {
        number
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .ok_or(DecodeError::PageOutOfRange {
                page: number,
                count: self.pages.len(),
            })
    }

    /// Default export file name, `out-of-ink-<name>.pdf`.
    pub fn output_file_name(&self) -> String {
        format!("out-of-ink-{}.pdf", self.name)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
