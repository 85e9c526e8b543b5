//! Configuration module for lookswitch
//!
//! Concentrates the user-facing configuration surface: display names for
//! the seven managed layers and the camera inset constants, loaded from an
//! optional TOML file and validated before anything else runs.

pub mod settings;

pub use settings::{ConfigError, Settings};
