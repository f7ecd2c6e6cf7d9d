//! Channel redistribution for a single ink color.

use crate::color::Cmyk;
use crate::mapping::{ChannelMapping, Destination, InkChannel};

/// Output accumulators, one per [`InkChannel`]. `None` is kept so routing
/// stays uniform; its total is thrown away.
#[derive(Default)]
struct Accumulator {
    cyan: f32,
    magenta: f32,
    yellow: f32,
    black: f32,
    none: f32,
}

impl Accumulator {
    fn route(&mut self, destination: Destination, amount: f32) {
        for channel in destination.channels() {
            match channel {
                InkChannel::Cyan => self.cyan += amount,
                InkChannel::Magenta => self.magenta += amount,
                InkChannel::Yellow => self.yellow += amount,
                InkChannel::Black => self.black += amount,
                InkChannel::None => self.none += amount,
            }
        }
    }

    fn into_cmyk(self) -> Cmyk {
        Cmyk::new(self.cyan, self.magenta, self.yellow, self.black).clamped()
    }
}

/// Redistribute `ink` according to `mapping`.
///
/// Each chromatic source contributes `source + black` to every channel in
/// its destination set. Contributions are summed, then clamped to
/// 0.0..=1.0. The input black does not pass through on its own: it only
/// reaches the output through the sources' destinations, so the output
/// black is zero unless some source is mapped to [`Destination::Black`].
///
/// # Example
///
/// ```
/// use ink_remap::{remap, ChannelMapping, Cmyk};
///
/// let ink = Cmyk::new(0.2, 0.0, 0.5, 0.1);
/// let out = remap(ink, &ChannelMapping::identity());
///
/// assert!((out.cyan - 0.3).abs() < 1e-6);
/// assert!((out.magenta - 0.1).abs() < 1e-6);
/// assert!((out.yellow - 0.6).abs() < 1e-6);
/// assert_eq!(out.black, 0.0);
/// ```
pub fn remap(ink: Cmyk, mapping: &ChannelMapping) -> Cmyk {
    let mut acc = Accumulator::default();
    acc.route(mapping.cyan, ink.cyan + ink.black);
    acc.route(mapping.magenta, ink.magenta + ink.black);
    acc.route(mapping.yellow, ink.yellow + ink.black);
    acc.into_cmyk()
}
