pub use crate::settings_types::*;
use anyhow::Context;
use bevy::prelude::*;
use pointer_input::PointerBindings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

impl Settings {
    pub fn read_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Loads settings, writing defaults on first run. Unreadable files fall
    /// back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("Creating default settings at {:?}", path);
            let settings = Settings::default();
            if let Err(e) = settings.save_to(path) {
                error!("Failed to write default settings: {:#}", e);
            }
            return settings;
        }

        match Self::read_from(path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("Failed to load settings: {:#}", e);
                Settings::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    pub fn pointer_bindings(&self) -> PointerBindings {
        PointerBindings::from_label(&self.pointer.primary_button)
    }
}

/// Loads [`Settings`] and the pointer bindings derived from them.
pub struct SettingsPlugin {
    pub path: PathBuf,
}

impl Default for SettingsPlugin {
    fn default() -> Self {
        Self {
            path: crate::storage_dir().join("settings.toml"),
        }
    }
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = Settings::load_from(&self.path);
        app.insert_resource(settings.pointer_bindings())
            .insert_resource(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::MouseButton;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("clickables-settings-tests");
        let _ = fs::create_dir_all(&dir);
        dir.join(name)
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [pointer]
            primary_button = "Right"

            [defaults]
            enable_highlight = true
            highlight_material = "glow"
            "#,
        )
        .unwrap();

        assert_eq!(settings.pointer_bindings().primary, MouseButton::Right);
        assert!(settings.overlay.enabled);
        assert!(settings.defaults.enable_highlight);
        assert_eq!(settings.defaults.highlight_material.as_deref(), Some("glow"));
    }

    #[test]
    fn test_load_creates_then_reads_back() {
        let path = scratch_path("roundtrip.toml");
        let _ = fs::remove_file(&path);

        let created = Settings::load_from(&path);
        assert_eq!(created, Settings::default());
        assert!(path.exists());

        let mut changed = created.clone();
        changed.overlay.enabled = false;
        changed.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), changed);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let path = scratch_path("broken.toml");
        fs::write(&path, "pointer = 3").unwrap();
        assert!(Settings::read_from(&path).is_err());
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
