//! Player preferences
//!
//! Persisted separately from the best score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tap sound on hit
    pub sound: bool,
    /// Particle burst on hit
    pub particles: bool,
    /// Tap sound volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            particles: true,
            volume: 1.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "tap_ball_settings";

    /// Volume actually applied to the tap sound
    pub fn effective_volume(&self) -> f32 {
        if self.sound {
            self.volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Flip the tap sound on or off, returning the new setting
    pub fn toggle_sound(&mut self) -> bool {
        self.sound = !self.sound;
        self.sound
    }

    /// Parse settings JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable settings: {e}");
            Self::default()
        })
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}
