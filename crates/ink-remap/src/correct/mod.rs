//! Page correction.
//!
//! The correction of one page is:
//!
//! 1. **Background sample** - pixel (0, 0) fixes the paper color of the run
//! 2. **Per pixel** - RGB to CMYK, then either paper (background match) or
//!    channel redistribution, then back to RGB in place
//!
//! Step 2 has no dependency between pixels, so [`InkCorrector`] may run it
//! on several threads once step 1 is done.

mod background;
mod corrector;
mod parallel;
mod remap;

pub use background::Background;
pub use corrector::{correct_buffer, correct_pixel, InkCorrector};
pub use remap::remap;
