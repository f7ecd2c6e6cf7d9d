//! Channel mapping configuration.
//!
//! A [`ChannelMapping`] tells the remapper where each chromatic source ink
//! (cyan, magenta, yellow) should go. It is validated when it is built, so
//! the correction code never sees an unknown destination.

mod destination;
mod error;

pub use destination::{Destination, InkChannel};
pub use error::ConfigurationError;

use serde::{Deserialize, Serialize};

/// Destination for each chromatic source channel.
///
/// The default maps every channel to itself.
///
/// # Example
///
/// ```
/// use ink_remap::{ChannelMapping, Destination};
///
/// let mapping = ChannelMapping::from_tokens("black", "magenta", "yellow").unwrap();
/// assert_eq!(mapping.cyan, Destination::Black);
/// assert!(!mapping.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelMapping {
    pub cyan: Destination,
    pub magenta: Destination,
    pub yellow: Destination,
}

impl ChannelMapping {
    pub fn new(cyan: Destination, magenta: Destination, yellow: Destination) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
        }
    }

    /// Every channel mapped to itself.
    pub fn identity() -> Self {
        Self::new(Destination::Cyan, Destination::Magenta, Destination::Yellow)
    }

    /// Build a mapping from the three selector tokens.
    ///
    /// Fails on the first unknown token.
    pub fn from_tokens(
        cyan: &str,
        magenta: &str,
        yellow: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(cyan.parse()?, magenta.parse()?, yellow.parse()?))
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for ChannelMapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Display for ChannelMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cyan->{} magenta->{} yellow->{}",
            self.cyan, self.magenta, self.yellow
        )
    }
}
