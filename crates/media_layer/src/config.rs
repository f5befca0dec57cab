//! Binding layer configuration
//!
//! Declarative description of which native subsystems to bring up and how
//! logging is filtered, loadable from TOML or RON keyed by file extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};
use crate::native::Subsystems;

/// Which native subsystems [`crate::Context::init`] brings up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubsystemConfig {
    /// Timer services
    pub timer: bool,
    /// Audio playback and capture
    pub audio: bool,
    /// Windowing and display
    pub video: bool,
    /// Joystick input
    pub joystick: bool,
    /// Haptic feedback devices
    pub haptic: bool,
    /// Game controller input; implies joystick
    pub game_controller: bool,
    /// Event queue; required for the pump, on by default
    pub events: bool,
    /// Hardware sensors
    pub sensor: bool,
}

impl Default for SubsystemConfig {
    fn default() -> Self {
        Self {
            timer: false,
            audio: true,
            video: true,
            joystick: false,
            haptic: false,
            game_controller: false,
            events: true,
            sensor: false,
        }
    }
}

impl SubsystemConfig {
    /// The native initialization mask this configuration selects
    pub fn mask(&self) -> Subsystems {
        let mut mask = Subsystems::empty();
        if self.timer {
            mask |= Subsystems::TIMER;
        }
        if self.audio {
            mask |= Subsystems::AUDIO;
        }
        if self.video {
            mask |= Subsystems::VIDEO;
        }
        if self.joystick || self.game_controller {
            mask |= Subsystems::JOYSTICK;
        }
        if self.haptic {
            mask |= Subsystems::HAPTIC;
        }
        if self.game_controller {
            mask |= Subsystems::GAME_CONTROLLER;
        }
        if self.events {
            mask |= Subsystems::EVENTS;
        }
        if self.sensor {
            mask |= Subsystems::SENSOR;
        }
        mask
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter string, e.g. `"info,media_layer=debug"`; when
    /// absent the `RUST_LOG` environment variable applies
    pub filter: Option<String>,
}

/// Top-level binding configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindConfig {
    /// Subsystem selection
    pub subsystems: SubsystemConfig,
    /// Logging setup
    pub logging: LogConfig,
}

impl BindConfig {
    /// Load a configuration from a `.toml` or `.ron` file
    pub fn load_from_file(path: impl AsRef<Path>) -> BindResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| BindError::Config(format!("failed to read {}: {e}", path.display())))?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents)
                .map_err(|e| BindError::Config(format!("invalid TOML in {}: {e}", path.display()))),
            Some("ron") => ron::from_str(&contents)
                .map_err(|e| BindError::Config(format!("invalid RON in {}: {e}", path.display()))),
            _ => Err(BindError::Config(format!(
                "unsupported config extension for {}",
                path.display()
            ))),
        }
    }

    /// Write the configuration to a `.toml` or `.ron` file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> BindResult<()> {
        let path = path.as_ref();
        let serialized = match extension(path) {
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| BindError::Config(format!("TOML serialization failed: {e}")))?,
            Some("ron") => {
                ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                    .map_err(|e| BindError::Config(format!("RON serialization failed: {e}")))?
            }
            _ => {
                return Err(BindError::Config(format!(
                    "unsupported config extension for {}",
                    path.display()
                )))
            }
        };

        fs::write(path, serialized)
            .map_err(|e| BindError::Config(format!("failed to write {}: {e}", path.display())))
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
