//! Server difficulty settings.

use ingot_utils::translations;
use ingot_utils::translations::Translation;
use serde::Deserialize;

/// The server difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Peaceful - no hostile mobs spawn, health regenerates.
    Peaceful = 0,
    /// Easy - hostile mobs deal less damage.
    Easy = 1,
    /// Normal - default difficulty.
    #[default]
    Normal = 2,
    /// Hard - hostile mobs deal more damage, can break doors.
    Hard = 3,
}

impl Difficulty {
    /// Returns true if this is peaceful difficulty.
    #[inline]
    #[must_use]
    pub const fn is_peaceful(self) -> bool {
        matches!(self, Self::Peaceful)
    }

    /// Parses a difficulty by its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "peaceful" => Self::Peaceful,
            "easy" => Self::Easy,
            "normal" => Self::Normal,
            "hard" => Self::Hard,
            _ => return None,
        })
    }

    /// The display name of the difficulty.
    #[must_use]
    pub const fn translation(self) -> Translation {
        match self {
            Self::Peaceful => translations::OPTIONS_DIFFICULTY_PEACEFUL,
            Self::Easy => translations::OPTIONS_DIFFICULTY_EASY,
            Self::Normal => translations::OPTIONS_DIFFICULTY_NORMAL,
            Self::Hard => translations::OPTIONS_DIFFICULTY_HARD,
        }
    }
}
