//! Startup settings, read from an optional `settings.toml` next to the binary.
use bevy::prelude::*;
use serde::Deserialize;

use crate::utils::constants::cube_constants::{DEFAULT_CUBE_SIZE, MAX_CUBE_SIZE, MIN_CUBE_SIZE};
use crate::utils::constants::game_constants::{
    DEFAULT_ANIMATION_DURATION_SECS, DEFAULT_PIECE_GAP, SEED,
};

/// User-tunable settings. Every field is optional in the file; missing
/// fields fall back to the defaults below.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CubeSettings {
    /// Cube size at startup.
    pub initial_size: usize,
    /// Gap between adjacent pieces.
    pub piece_gap: f32,
    /// Duration of one slice rotation in seconds.
    pub animation_duration_secs: f32,
    /// Seed for the scramble RNG.
    pub seed: u64,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_CUBE_SIZE,
            piece_gap: DEFAULT_PIECE_GAP,
            animation_duration_secs: DEFAULT_ANIMATION_DURATION_SECS,
            seed: SEED,
        }
    }
}

impl CubeSettings {
    /// Reads `settings.toml` when present, falling back to defaults on a
    /// missing or invalid file. Wasm builds always use the defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(raw) = std::fs::read_to_string("settings.toml") {
            match toml::from_str::<CubeSettings>(&raw) {
                Ok(settings) => return settings.sanitized(),
                Err(err) => {
                    crate::log!("settings.toml is invalid, using defaults: {err}");
                }
            }
        }
        Self::default()
    }

    /// Clamps file values into the ranges the rest of the game assumes.
    /// The core never re-validates the size, so it must be clamped here.
    fn sanitized(mut self) -> Self {
        self.initial_size = self.initial_size.clamp(MIN_CUBE_SIZE, MAX_CUBE_SIZE);
        self.piece_gap = self.piece_gap.max(0.0);
        self.animation_duration_secs = self.animation_duration_secs.max(0.01);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_builtin_constants() {
        let settings = CubeSettings::default();
        assert_eq!(settings.initial_size, 3);
        assert_eq!(settings.piece_gap, 0.05);
        assert_eq!(settings.animation_duration_secs, 0.3);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let settings: CubeSettings = toml::from_str("initial_size = 5").unwrap();
        assert_eq!(settings.initial_size, 5);
        assert_eq!(settings.piece_gap, CubeSettings::default().piece_gap);
        assert_eq!(settings.seed, CubeSettings::default().seed);
    }

    #[test]
    fn sanitize_clamps_out_of_range_sizes() {
        let settings: CubeSettings = toml::from_str("initial_size = 50").unwrap();
        assert_eq!(settings.sanitized().initial_size, MAX_CUBE_SIZE);

        let settings: CubeSettings = toml::from_str("initial_size = 1").unwrap();
        assert_eq!(settings.sanitized().initial_size, MIN_CUBE_SIZE);
    }
}
