use crate::fruit::MAX_FRUITS;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};
use thiserror::Error;

pub const DEFAULT_FRUIT_COUNT: u8 = 3;
pub const DEFAULT_TOTAL_REPETITIONS: u32 = 15;
pub const MIN_TOTAL_REPETITIONS: u32 = 5;
/// About an hour of frames at the default frame delay.
pub const MAX_TOTAL_REPETITIONS: u32 = 4_800;
pub const DEFAULT_FRAME_DELAY_MS: u64 = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("fruit count must be between 1 and {max}, got {got}")]
    FruitCountOutOfRange { got: u8, max: u8 },

    #[error("total repetitions must be at least {min}, got {got}")]
    TooFewRepetitions { got: u32, min: u32 },

    #[error("total repetitions must be at most {max}, got {got}")]
    TooManyRepetitions { got: u32, max: u32 },

    #[error("frame delay must be greater than zero")]
    ZeroFrameDelay,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunables of a machine. Fixed for the lifetime of a [`crate::SlotMachine`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// How many fruits the reels pick from. Fewer fruits, more wins.
    pub fruit_count: u8,
    /// Length of a spin. Column 2 moves for `total_repetitions * 3 + 1` frames.
    pub total_repetitions: u32,
    pub frame_delay_ms: u64,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            fruit_count: DEFAULT_FRUIT_COUNT,
            total_repetitions: DEFAULT_TOTAL_REPETITIONS,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl MachineConfig {
    pub fn new(
        fruit_count: u8,
        total_repetitions: u32,
        frame_delay_ms: u64,
    ) -> Result<Self, ConfigError> {
        let config = MachineConfig {
            fruit_count,
            total_repetitions,
            frame_delay_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fruit_count == 0 || self.fruit_count > MAX_FRUITS {
            return Err(ConfigError::FruitCountOutOfRange {
                got: self.fruit_count,
                max: MAX_FRUITS,
            });
        }
        if self.total_repetitions < MIN_TOTAL_REPETITIONS {
            return Err(ConfigError::TooFewRepetitions {
                got: self.total_repetitions,
                min: MIN_TOTAL_REPETITIONS,
            });
        }
        if self.total_repetitions > MAX_TOTAL_REPETITIONS {
            return Err(ConfigError::TooManyRepetitions {
                got: self.total_repetitions,
                max: MAX_TOTAL_REPETITIONS,
            });
        }
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroFrameDelay);
        }
        Ok(())
    }

    /// Reads a JSON config file. Missing fields fall back to defaults; the
    /// result is not validated so CLI overrides can still be applied.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Frame index at which column 0 stops moving.
    pub fn first_column_stop(&self) -> u32 {
        self.total_repetitions / 3
    }

    /// Frame index at which column 1 stops moving.
    pub fn second_column_stop(&self) -> u32 {
        self.first_column_stop() * 2
    }

    /// Index of the final frame of a session.
    pub fn last_frame(&self) -> u32 {
        self.total_repetitions * 3
    }

    pub fn frames_per_session(&self) -> u32 {
        self.last_frame() + 1
    }
}

pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
