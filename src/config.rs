use log::{info, warn};
use serde::Deserialize;
use std::fs;

use crate::grid::EnemyStats;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub enemies: EnemiesConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_width")]
    pub width: i32,
}

#[derive(Debug, Deserialize)]
pub struct EnemiesConfig {
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default = "default_speed")]
    pub speed: i32,
    #[serde(default = "default_damage")]
    pub damage: i32,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Bounded wait for one key event per tick, in milliseconds.
    /// This is the simulation's only clock.
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
}

// Default values
fn default_height() -> i32 { 24 }
fn default_width() -> i32 { 15 }
fn default_health() -> i32 { 100 }
fn default_speed() -> i32 { 1 }
fn default_damage() -> i32 { 10 }
fn default_poll_ms() -> u64 { 300 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
        }
    }
}

impl Default for EnemiesConfig {
    fn default() -> Self {
        Self {
            health: default_health(),
            speed: default_speed(),
            damage: default_damage(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_ms: default_poll_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            enemies: EnemiesConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    info!("loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    warn!("failed to parse config.toml: {}", e);
                    warn!("using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                info!("no config.toml found, using default configuration");
                Config::default()
            }
        }
    }

    pub fn enemy_stats(&self) -> EnemyStats {
        EnemyStats {
            health: self.enemies.health,
            speed: self.enemies.speed,
            damage: self.enemies.damage,
        }
    }
}
