//! Color types and conversion utilities
//!
//! This module provides the two color representations the correction engine
//! moves between, with compile-time distinction between them.
//!
//! # Color Spaces
//!
//! - **Rgb**: Additive color as produced by the page rasterizer. Use for I/O.
//! - **Cmyk**: Subtractive ink color. Use for all channel calculations.
//!
//! # Example
//!
//! ```
//! use ink_remap::{Cmyk, Rgb};
//!
//! // Read a pixel from a raster page
//! let rgb = Rgb::from_u8(0, 255, 255);
//!
//! // Decompose into inks
//! let ink = Cmyk::from(rgb);
//! assert_eq!(ink.cyan, 1.0);
//! assert_eq!(ink.black, 0.0);
//!
//! // Back to additive for output
//! let output = Rgb::from(ink);
//! assert_eq!(output.to_bytes(), [0, 255, 255]);
//! ```

mod cmyk;
mod rgb;

pub use cmyk::Cmyk;
pub use rgb::Rgb;
