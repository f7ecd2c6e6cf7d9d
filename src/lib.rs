//! Out of Ink - reprint documents with empty ink cartridges
//!
//! Rasterizes document pages, rewrites their inks with a channel mapping
//! from the `ink-remap` crate and assembles the corrected pages into a PDF.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
