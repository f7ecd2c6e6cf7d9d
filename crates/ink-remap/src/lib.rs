//! ink-remap: ink channel remapping for raster pages
//!
//! This library rewrites the inks of a rendered page so that it can be
//! printed with one or more of the cyan, magenta and yellow cartridges
//! empty: each channel's coverage is routed to other channels or dropped,
//! and the page background is turned into bare paper.
//!
//! # Quick Start
//!
//! The [`InkCorrector`] is the primary entry point:
//!
//! ```
//! use ink_remap::{ChannelMapping, InkCorrector, RasterBuffer, Rgb};
//!
//! let mut page = RasterBuffer::filled(2, 2, [255, 255, 255, 255]);
//! page.set_pixel(1, 1, Rgb::from_u8(255, 0, 255));
//!
//! // Out of magenta: print it with cyan + yellow instead.
//! let mapping = ChannelMapping::from_tokens("cyan", "cyan+yellow", "yellow").unwrap();
//! InkCorrector::new(mapping).correct(&mut page);
//!
//! assert_eq!(page.rgba(1, 1), Some([0, 255, 0, 255]));
//! ```
//!
//! # Color Model
//!
//! Pixels arrive as additive [`Rgb`] and are decomposed into [`Cmyk`] with
//! full grey component replacement:
//!
//! ```text
//! black   = 1 - max(r, g, b)
//! cyan    = (1 - r - black) / (1 - black)     (0 when black == 1)
//! magenta = (1 - g - black) / (1 - black)
//! yellow  = (1 - b - black) / (1 - black)
//! ```
//!
//! and recombined with `r = (1 - cyan)(1 - black)` and so on.
//!
//! # Redistribution
//!
//! Every chromatic source channel carries `source + black` to each channel
//! of its [`Destination`]. Black has no destination of its own: it only
//! survives through the sources, so a page corrected with the identity
//! mapping comes out with its grey component printed as a C+M+Y composite.
//! Accumulated coverage is clamped to 0..=1.
//!
//! # Background
//!
//! Pixel (0, 0) defines the paper color of a run. Pixels exactly equal to it
//! become [`Cmyk::PAPER`] regardless of mapping, so an off-white scan comes
//! out on white paper.

pub mod color;
pub mod correct;
pub mod mapping;
pub mod raster;


pub use color::{Cmyk, Rgb};
pub use correct::{correct_buffer, correct_pixel, remap, Background, InkCorrector};
pub use mapping::{ChannelMapping, ConfigurationError, Destination, InkChannel};
pub use raster::{RasterBuffer, RasterError};
