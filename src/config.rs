//! Tunable constants for the encounter, navigation and shop subsystems.
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides:
//!
//! ```ron
//! (
//!     encounter: (coin_reward: 250),
//!     navigation: (tile_size: 32),
//! )
//! ```

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub encounter: EncounterConfig,
    pub navigation: NavigationConfig,
    pub shop: ShopConfig,
}

impl GameConfig {
    /// Load a config from a RON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config if the file exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Seconds the opponent waits before acting in a trainer battle.
    pub battle_turn_delay: f32,
    /// Seconds the opponent waits before acting in a wild encounter.
    pub capture_turn_delay: f32,
    /// Seconds a terminal result stays on screen before returning to the overworld.
    pub result_display: f32,
    pub coin_reward: u32,
    pub coin_item_name: String,
    pub capture_item_name: String,
    /// Substring that marks an item as usable from the item menu.
    pub potion_keyword: String,
    pub default_player_attack: u32,
    pub default_opponent_attack: u32,
    /// Heal applied by a potion that carries no effect metadata.
    pub default_heal_amount: u32,
}

impl EncounterConfig {
    pub const DEFAULT_COIN_REWARD: u32 = 100;

    pub fn new() -> Self {
        Self {
            battle_turn_delay: 1.0,
            capture_turn_delay: 1.5,
            result_display: 2.5,
            coin_reward: Self::DEFAULT_COIN_REWARD,
            coin_item_name: "Coins".to_string(),
            capture_item_name: "Pokeball".to_string(),
            potion_keyword: "Potion".to_string(),
            default_player_attack: 20,
            default_opponent_attack: 15,
            default_heal_amount: 20,
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    /// Maximum number of direction arrows drawn along a route.
    pub max_indicators: usize,
    /// Upper bound on cells the pathfinder may enqueue before giving up.
    pub search_limit: usize,
}

impl NavigationConfig {
    pub const DEFAULT_MAX_INDICATORS: usize = 15;

    pub fn new() -> Self {
        Self {
            tile_size: 64,
            max_indicators: Self::DEFAULT_MAX_INDICATORS,
            search_limit: 65_536,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Seconds between stock refreshes.
    pub refresh_interval: f32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            refresh_interval: 3600.0,
        }
    }
}
