//! User settings
//!
//! Display names for the seven managed layers plus the camera inset
//! constants. Every field in the file is optional and falls back to a
//! default; omitting the file entirely means all defaults. Validation
//! rejects names that would make layer resolution ambiguous.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::core::Vec2;
use crate::domain::layer::LogicalLayer;
use crate::domain::layout::LayoutParams;

/// Errors that can occur while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Display name for layer {layer:?} is empty")]
    EmptyName { layer: LogicalLayer },

    #[error("Display name {name:?} is assigned to more than one layer")]
    DuplicateName { name: String },
}

/// Display names of the seven layers as the host scene graph knows them
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LayerNames {
    pub camera: String,
    pub event: String,
    pub asset3d_main: String,
    pub asset3d_sub: String,
    pub asset2d_main: String,
    pub asset2d_sub: String,
    pub gameplay: String,
}

impl Default for LayerNames {
    fn default() -> Self {
        Self {
            camera: "Camera".to_string(),
            event: "Event Board".to_string(),
            asset3d_main: "3D Stage Main".to_string(),
            asset3d_sub: "3D Stage Sub".to_string(),
            asset2d_main: "2D Board Main".to_string(),
            asset2d_sub: "2D Board Sub".to_string(),
            gameplay: "Gameplay Feed".to_string(),
        }
    }
}

/// Camera inset constants used by the stage looks
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    /// Top-left corner of the inset, canvas coordinates
    pub inset_position: [f32; 2],
    /// Inset bounds (width, height)
    pub inset_size: [f32; 2],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            inset_position: [1600.0, 840.0],
            inset_size: [320.0, 240.0],
        }
    }
}

/// Validated user configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub layers: LayerNames,
    pub camera: CameraSettings,
}

impl Settings {
    /// Loads settings from `path`, or defaults when no path is given
    ///
    /// An explicitly named file must exist and parse; defaults always
    /// validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects configurations that would make resolution ambiguous
    pub fn validate(&self) -> Result<(), ConfigError> {
        for layer in LogicalLayer::ALL {
            if self.display_name(layer).trim().is_empty() {
                return Err(ConfigError::EmptyName { layer });
            }
        }

        for (i, a) in LogicalLayer::ALL.iter().enumerate() {
            for b in &LogicalLayer::ALL[i + 1..] {
                if self.display_name(*a) == self.display_name(*b) {
                    return Err(ConfigError::DuplicateName {
                        name: self.display_name(*a).to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Display name configured for a logical layer
    pub fn display_name(&self, layer: LogicalLayer) -> &str {
        match layer {
            LogicalLayer::Camera => &self.layers.camera,
            LogicalLayer::Event => &self.layers.event,
            LogicalLayer::Asset3dMain => &self.layers.asset3d_main,
            LogicalLayer::Asset3dSub => &self.layers.asset3d_sub,
            LogicalLayer::Asset2dMain => &self.layers.asset2d_main,
            LogicalLayer::Asset2dSub => &self.layers.asset2d_sub,
            LogicalLayer::Gameplay => &self.layers.gameplay,
        }
    }

    /// Constants the layout engine needs
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            camera_inset_position: Vec2::new(
                self.camera.inset_position[0],
                self.camera.inset_position[1],
            ),
            camera_inset_size: Vec2::new(self.camera.inset_size[0], self.camera.inset_size[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_a_file() {
        let settings = Settings::load(None).expect("defaults must load");
        assert_eq!(settings.display_name(LogicalLayer::Camera), "Camera");
        assert_eq!(settings.camera.inset_size, [320.0, 240.0]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [layers]
            camera = "Webcam"
            "#,
        )
        .expect("partial file must parse");

        assert_eq!(settings.display_name(LogicalLayer::Camera), "Webcam");
        assert_eq!(settings.display_name(LogicalLayer::Event), "Event Board");
        assert_eq!(settings.camera.inset_position, [1600.0, 840.0]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Settings, _> = toml::from_str(
            r#"
            [layers]
            cameraa = "typo"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_display_names_fail_validation() {
        let mut settings = Settings::default();
        settings.layers.event = "Camera".to_string();

        match settings.validate() {
            Err(ConfigError::DuplicateName { name }) => assert_eq!(name, "Camera"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn empty_display_name_fails_validation() {
        let mut settings = Settings::default();
        settings.layers.gameplay = "  ".to_string();

        assert!(matches!(
            settings.validate(),
            Err(ConfigError::EmptyName {
                layer: LogicalLayer::Gameplay
            })
        ));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let path = std::env::temp_dir().join("lookswitch_settings_does_not_exist.toml");
        let result = Settings::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn file_with_camera_overrides_loads() {
        let path = std::env::temp_dir().join("lookswitch_settings_camera_test.toml");
        std::fs::write(
            &path,
            r#"
            [camera]
            inset_position = [1540.0, 800.0]
            inset_size = [360.0, 270.0]
            "#,
        )
        .expect("fixture write");

        let settings = Settings::load(Some(&path)).expect("file must load");
        let params = settings.layout_params();
        assert_eq!(params.camera_inset_position, Vec2::new(1540.0, 800.0));
        assert_eq!(params.camera_inset_size, Vec2::new(360.0, 270.0));

        let _ = std::fs::remove_file(&path);
    }
}
