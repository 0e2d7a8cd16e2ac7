//! Server configuration, loaded from a JSON5 file.
use std::{fs, io, path::Path};

use ingot_utils::GameType;
use serde::Deserialize;

use crate::difficulty::Difficulty;

/// The configuration written out when no config file exists yet.
pub const DEFAULT_CONFIG: &str = include_str!("../assets/ingot_config.json5");

/// An error raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("could not access config file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 or has missing fields.
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is outside of its allowed range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// The server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The difficulty the server starts with.
    pub difficulty: Difficulty,
    /// The game mode given to new players.
    pub default_game_mode: GameType,
    /// Names of players that may run every command.
    pub ops: Vec<String>,
    /// The lowest block level of the overworld.
    pub min_y: i32,
    /// The build height of the overworld.
    pub height: i32,
    /// Flat terrain layers, bottom up.
    pub flat_layers: Vec<String>,
    /// The initial world spawn.
    pub spawn_point: [i32; 3],
    /// The initial world border diameter.
    pub world_border_size: f64,
    /// Ticks per second.
    pub tick_rate: f32,
    /// Players the console host spawns on startup.
    #[serde(default)]
    pub fake_players: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            default_game_mode: GameType::Survival,
            ops: vec!["Steve".to_string()],
            min_y: -64,
            height: 384,
            flat_layers: vec![
                "minecraft:bedrock".to_string(),
                "minecraft:dirt".to_string(),
                "minecraft:dirt".to_string(),
                "minecraft:grass_block".to_string(),
            ],
            spawn_point: [0, -60, 0],
            world_border_size: 59_999_968.0,
            tick_rate: 20.0,
            fake_players: vec!["Steve".to_string(), "Alex".to_string()],
        }
    }
}

impl ServerConfig {
    /// Loads the config at `path`, writing the default config there first if it doesn't exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let config_str = fs::read_to_string(path)?;
            serde_json5::from_str::<ServerConfig>(&config_str)?
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Created default config at {}", path.display());
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is within its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height % 16 != 0 || !(16..=4064).contains(&self.height) {
            return Err(ConfigError::Invalid(
                "height must be a multiple of 16 between 16 and 4064",
            ));
        }
        if self.min_y % 16 != 0 {
            return Err(ConfigError::Invalid("min_y must be a multiple of 16"));
        }
        if !(1.0..=10_000.0).contains(&self.tick_rate) {
            return Err(ConfigError::Invalid("tick_rate must be in range 1..10000"));
        }
        if !(1.0..=59_999_968.0).contains(&self.world_border_size) {
            return Err(ConfigError::Invalid(
                "world_border_size must be in range 1..59999968",
            ));
        }
        if self.flat_layers.len() as i32 > self.height {
            return Err(ConfigError::Invalid("flat_layers must fit in the build height"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_matches_default_impl() {
        let parsed: ServerConfig =
            serde_json5::from_str(DEFAULT_CONFIG).expect("embedded config parses");
        let default = ServerConfig::default();

        assert_eq!(parsed.difficulty, default.difficulty);
        assert_eq!(parsed.default_game_mode, default.default_game_mode);
        assert_eq!(parsed.ops, default.ops);
        assert_eq!(parsed.min_y, default.min_y);
        assert_eq!(parsed.height, default.height);
        assert_eq!(parsed.flat_layers, default.flat_layers);
        assert_eq!(parsed.spawn_point, default.spawn_point);
        assert_eq!(parsed.fake_players, default.fake_players);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_heights() {
        let config = ServerConfig {
            height: 100,
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
