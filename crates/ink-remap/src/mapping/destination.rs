//! Mapping destinations for a single source ink channel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// One accumulator of the remapped ink color.
///
/// `None` is a sink: whatever is routed there is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InkChannel {
    None,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

/// Where a source channel's contribution goes.
///
/// These are exactly the eight selector values the tool offers. Each
/// serializes to its token (`"cyan+magenta"` and so on) and parsing any
/// other string fails with [`ConfigurationError::UnknownMapping`].
///
/// # Example
///
/// ```
/// use ink_remap::{Destination, InkChannel};
///
/// let dest: Destination = "cyan+yellow".parse().unwrap();
/// assert_eq!(dest.channels(), &[InkChannel::Cyan, InkChannel::Yellow]);
/// assert!("teal".parse::<Destination>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Destination {
    None,
    Cyan,
    Magenta,
    Yellow,
    CyanMagenta,
    CyanYellow,
    MagentaYellow,
    Black,
}

impl Destination {
    /// All selector values, in the order they are offered to the user.
    pub const ALL: [Destination; 8] = [
        Destination::None,
        Destination::Cyan,
        Destination::Magenta,
        Destination::Yellow,
        Destination::CyanMagenta,
        Destination::CyanYellow,
        Destination::MagentaYellow,
        Destination::Black,
    ];

    /// The accumulators this destination feeds.
    pub fn channels(self) -> &'static [InkChannel] {
        match self {
            Destination::None => &[InkChannel::None],
            Destination::Cyan => &[InkChannel::Cyan],
            Destination::Magenta => &[InkChannel::Magenta],
            Destination::Yellow => &[InkChannel::Yellow],
            Destination::CyanMagenta => &[InkChannel::Cyan, InkChannel::Magenta],
            Destination::CyanYellow => &[InkChannel::Cyan, InkChannel::Yellow],
            Destination::MagentaYellow => &[InkChannel::Magenta, InkChannel::Yellow],
            Destination::Black => &[InkChannel::Black],
        }
    }

    /// Persisted token for this destination.
    pub fn token(self) -> &'static str {
        match self {
            Destination::None => "none",
            Destination::Cyan => "cyan",
            Destination::Magenta => "magenta",
            Destination::Yellow => "yellow",
            Destination::CyanMagenta => "cyan+magenta",
            Destination::CyanYellow => "cyan+yellow",
            Destination::MagentaYellow => "magenta+yellow",
            Destination::Black => "black",
        }
    }

    /// Human readable label, as shown next to the selector.
    pub fn label(self) -> &'static str {
        match self {
            Destination::None => "None",
            Destination::Cyan => "Cyan",
            Destination::Magenta => "Magenta",
            Destination::Yellow => "Yellow",
            Destination::CyanMagenta => "Cyan + Magenta",
            Destination::CyanYellow => "Cyan + Yellow",
            Destination::MagentaYellow => "Magenta + Yellow",
            Destination::Black => "Black (Cyan + Magenta + Yellow)",
        }
    }
}

impl FromStr for Destination {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.token() == s)
            .ok_or_else(|| ConfigurationError::UnknownMapping(s.to_string()))
    }
}

impl TryFrom<String> for Destination {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Destination> for String {
    fn from(dest: Destination) -> Self {
        dest.token().to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
