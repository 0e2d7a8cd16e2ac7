//! Block positions, identifiers and game modes.
//!
//! Wrapper types making it harder to accidentally use the wrong underlying type.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The block containing the given point.
    #[must_use]
    pub fn containing(pos: Vector3<f64>) -> Self {
        Self::new(pos.x.floor() as i32, pos.y.floor() as i32, pos.z.floor() as i32)
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(self) -> i32 {
        self.0.z
    }

    /// Returns this position moved by the given amounts.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// The centre of the bottom face of the block.
    #[must_use]
    pub fn bottom_center(self) -> Vector3<f64> {
        Vector3::new(
            f64::from(self.0.x) + 0.5,
            f64::from(self.0.y),
            f64::from(self.0.z) + 0.5,
        )
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

/// A namespaced identifier such as `minecraft:stone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    /// The namespace, `minecraft` by default.
    pub namespace: Cow<'static, str>,
    /// The path.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// The namespace used when none is given.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates an identifier in the vanilla namespace.
    #[must_use]
    pub fn vanilla(path: String) -> Self {
        Identifier {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Owned(path),
        }
    }

    /// Creates an identifier in the vanilla namespace from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Identifier {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Returns true if the character may appear in a namespace.
    #[must_use]
    pub fn valid_namespace_char(namespace_char: char) -> bool {
        namespace_char == '_'
            || namespace_char == '-'
            || namespace_char.is_ascii_lowercase()
            || namespace_char.is_ascii_digit()
            || namespace_char == '.'
    }

    /// Returns true if the character may appear in a path.
    #[must_use]
    pub fn valid_path_char(path_char: char) -> bool {
        Self::valid_namespace_char(path_char) || path_char == '/'
    }

    /// Parses an identifier, defaulting to the vanilla namespace.
    pub fn parse(s: &str) -> Result<Self, String> {
        let (namespace, path) = match s.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (Self::VANILLA_NAMESPACE, s),
        };

        if namespace.is_empty() || !namespace.chars().all(Self::valid_namespace_char) {
            return Err(format!("Invalid namespace: {namespace}"));
        }
        if path.is_empty() || !path.chars().all(Self::valid_path_char) {
            return Err(format!("Invalid path: {path}"));
        }

        Ok(Identifier {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_string()
    }
}

/// The game mode of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Survival mode.
    #[default]
    Survival = 0,
    /// Creative mode.
    Creative = 1,
    /// Adventure mode.
    Adventure = 2,
    /// Spectator mode.
    Spectator = 3,
}

impl GameType {
    /// Parses a game mode by name, abbreviation or id.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "survival" | "s" | "0" => GameType::Survival,
            "creative" | "c" | "1" => GameType::Creative,
            "adventure" | "a" | "2" => GameType::Adventure,
            "spectator" | "sp" | "3" => GameType::Spectator,
            _ => return None,
        })
    }

    /// The lowercase name of the game mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameType::Survival => "survival",
            GameType::Creative => "creative",
            GameType::Adventure => "adventure",
            GameType::Spectator => "spectator",
        }
    }

    /// Creative and spectator players can't be hurt.
    #[must_use]
    pub const fn is_invulnerable(self) -> bool {
        matches!(self, GameType::Creative | GameType::Spectator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_defaults_to_vanilla_namespace() {
        let id: Identifier = "stone".parse().expect("valid identifier");
        assert_eq!(id, Identifier::vanilla_static("stone"));
        assert_eq!(id.to_string(), "minecraft:stone");

        let id: Identifier = "custom:bars/first".parse().expect("valid identifier");
        assert_eq!(id.namespace, "custom");
        assert_eq!(id.path, "bars/first");
    }

    #[test]
    fn identifier_rejects_invalid_characters() {
        assert!(Identifier::parse("Stone").is_err());
        assert!(Identifier::parse("bad:").is_err());
        assert!(Identifier::parse("a:b:c").is_err());
        assert!(Identifier::parse("with space").is_err());
    }

    #[test]
    fn game_type_accepts_aliases() {
        assert_eq!(GameType::parse("sp"), Some(GameType::Spectator));
        assert_eq!(GameType::parse("1"), Some(GameType::Creative));
        assert_eq!(GameType::parse("hardcore"), None);
    }
}
