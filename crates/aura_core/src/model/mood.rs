//! Named color palettes.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed set of board palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Aurora,
    Sunset,
    Ocean,
    Midnight,
    Cyber,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Aurora,
        Mood::Sunset,
        Mood::Ocean,
        Mood::Midnight,
        Mood::Cyber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Aurora => "aurora",
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
            Self::Midnight => "midnight",
            Self::Cyber => "cyber",
        }
    }

    /// The four colors applied to `--color-1` through `--color-4`.
    pub fn palette(self) -> [&'static str; 4] {
        match self {
            Self::Aurora => ["#ff7eb3", "#8e44ad", "#fd79a8", "#6c5ce7"],
            Self::Sunset => ["#ff4e50", "#f9d423", "#e67e22", "#d35400"],
            Self::Ocean => ["#1abc9c", "#2980b9", "#3498db", "#16a085"],
            Self::Midnight => ["#00b894", "#0984e3", "#2d3436", "#6c5ce7"],
            Self::Cyber => ["#fdcb6e", "#e84393", "#00cec9", "#d63031"],
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a palette name is not one of [`Mood::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl Display for UnknownMood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown mood `{}`; expected aurora|sunset|ocean|midnight|cyber",
            self.0
        )
    }
}

impl Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name() == normalized)
            .ok_or_else(|| UnknownMood(value.trim().to_string()))
    }
}
