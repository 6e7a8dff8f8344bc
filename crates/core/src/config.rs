//! Game configuration

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::{GameMode, DEFAULT_ARR_MS, DEFAULT_DAS_MS, MAX_START_LEVEL};

/// Upper bound for `das_ms` and `arr_ms`.
pub const MAX_TIMING_MS: u32 = 10_000;

/// Settings fixed for the lifetime of a [`Game`](crate::Game).
///
/// `start_level` and `mode` are the values used until the menu picks new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: u32,
    pub start_level: u32,
    pub mode: GameMode,
    pub das_ms: u32,
    pub arr_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            start_level: 0,
            mode: GameMode::Normal,
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        validate_start_level(self.start_level)?;
        for (name, value) in [("das_ms", self.das_ms), ("arr_ms", self.arr_ms)] {
            if value == 0 || value > MAX_TIMING_MS {
                return Err(GameError::InvalidTiming { name });
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_start_level(level: u32) -> Result<(), GameError> {
    if level > MAX_START_LEVEL {
        return Err(GameError::InvalidStartLevel(level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = GameConfig {
            start_level: 10,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(GameError::InvalidStartLevel(10)));

        let config = GameConfig {
            arr_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidTiming { name: "arr_ms" })
        );
    }

    #[test]
    fn test_rejects_oversized_timing() {
        let config = GameConfig {
            das_ms: MAX_TIMING_MS + 1,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidTiming { name: "das_ms" })
        );

        let config = GameConfig {
            das_ms: MAX_TIMING_MS,
            arr_ms: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidTiming { name: "arr_ms" })
        );
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig {
            seed: 77,
            mode: GameMode::FortyLines,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
