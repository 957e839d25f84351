use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use super::bot_controller::DEFAULT_DIFFICULTY;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Probability that the computer plays its searched move instead of
    /// a random one.
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,
    /// Artificial pause before the computer replies. Presentation only,
    /// never affects the chosen move.
    #[serde(default = "default_move_delay_ms")]
    pub move_delay_ms: u64,
    /// Fixed RNG seed for reproducible sessions.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_difficulty() -> f64 {
    DEFAULT_DIFFICULTY
}

fn default_move_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            move_delay_ms: default_move_delay_ms(),
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.difficulty) {
            return Err(format!(
                "difficulty must be within [0, 1], got {}",
                self.difficulty
            ));
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<GameConfig, String> {
    let config: GameConfig = serde_yaml_ng::from_str(content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

/// Loads the config file, falling back to defaults when it does not
/// exist. Any other read or parse failure is an error.
pub fn load_config(path: &str) -> Result<GameConfig, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(err) => match err.kind() {
            ErrorKind::NotFound => Ok(GameConfig::default()),
            _ => Err(format!("Failed to read config file: {}", err)),
        },
    }
}

pub fn save_config(path: &str, config: &GameConfig) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
