//! Scene settings
//!
//! Static configuration supplied at startup. Loaded from an optional
//! `settings.json` next to the working directory; missing or malformed
//! files fall back to defaults.

use serde::{Deserialize, Serialize};

/// Startup configuration for the diorama
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Window size in logical pixels
    pub width: u32,
    pub height: u32,

    /// Narrative message revealed letter by letter
    pub message: String,
    /// Signature line drawn bottom-left every frame
    pub signature: String,

    /// Number of stars in the night sky
    pub star_count: usize,
    /// Seed for star placement (same seed, same sky)
    pub star_seed: u64,

    /// Whether grass starts visible
    pub grass: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Desert - Day and Night".to_string(),
            width: 1280,
            height: 720,
            message: "Nastavice se na 3D projektu".to_string(),
            signature: "Mirko Mandic RA 174-2015".to_string(),
            star_count: 100,
            star_seed: 0x5EED,
            grass: true,
        }
    }
}

impl Settings {
    /// Settings file path, relative to the working directory
    const FILE: &'static str = "settings.json";

    /// Load settings, falling back to defaults if the file is absent or invalid
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", Self::FILE, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
