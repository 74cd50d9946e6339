// NGFW Simulator - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Application settings management using a local JSON file.
//!
//! Settings are presentation-side knobs only; the session core never reads
//! them.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Whether the `hint` command is available.
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
    /// Milliseconds between commit progress ticks.
    #[serde(default = "default_commit_tick_ms")]
    pub commit_tick_ms: u64,
    /// Whether the first-run welcome text was already shown.
    #[serde(default)]
    pub onboarding_seen: bool,
}

fn default_show_hints() -> bool { true }
fn default_commit_tick_ms() -> u64 { 50 }

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_hints: default_show_hints(),
            commit_tick_ms: default_commit_tick_ms(),
            onboarding_seen: false,
        }
    }
}

/// Settings manager that persists to a JSON file.
#[derive(Debug)]
pub struct Settings {
    settings: AppSettings,
    path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create a new Settings instance, loading from disk.
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ngfw-simulator")
            .join("settings.json");

        let settings = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("Failed to parse settings: {}", e);
                        AppSettings::default()
                    }
                },
                Err(e) => {
                    warn!("Failed to read settings: {}", e);
                    AppSettings::default()
                }
            }
        } else {
            AppSettings::default()
        };

        Self { settings, path }
    }

    /// Save settings to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&self.settings) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Get whether hints are enabled.
    pub fn show_hints(&self) -> bool {
        self.settings.show_hints
    }

    /// Set whether hints are enabled.
    pub fn set_show_hints(&mut self, enabled: bool) {
        self.settings.show_hints = enabled;
        self.save();
    }

    /// Get the commit tick interval in milliseconds.
    pub fn commit_tick_ms(&self) -> u64 {
        self.settings.commit_tick_ms
    }

    /// Get whether the welcome text was already shown.
    pub fn onboarding_seen(&self) -> bool {
        self.settings.onboarding_seen
    }

    /// Mark the welcome text as shown.
    pub fn set_onboarding_seen(&mut self) {
        self.settings.onboarding_seen = true;
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert!(settings.show_hints);
        assert_eq!(settings.commit_tick_ms, 50);
        assert!(!settings.onboarding_seen);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.show_hints);
        assert_eq!(settings.commit_tick_ms, 50);
    }
}
