pub mod document;
pub mod settings;

pub use document::{PageFormat, SourceDocument, SourcePage};
pub use settings::{
    validate_quality, Settings, SettingsError, DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY,
};
