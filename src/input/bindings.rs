//! Persistent trigger bindings
//!
//! The binding store round-trips its file as opaque TOML: entries and
//! fields it does not understand are kept verbatim, so whatever a host
//! writes next to the key assignment survives a load/save cycle. Only the
//! `key` field of each trigger's table is interpreted here, by the terminal
//! key host.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::{Table, Value};
use tracing::debug;

use crate::input::triggers::TRIGGERS;

/// Default key per trigger, in registration order
const DEFAULT_KEYS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Binding file errors
#[derive(Debug, Error)]
pub enum BindingsError {
    #[error("Failed to read bindings file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in bindings file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to encode bindings: {0}")]
    Encode(String),

    #[error("Failed to write bindings file at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Binding table round-tripped through the bindings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerBindings {
    entries: Table,
}

impl TriggerBindings {
    /// Loads from `path`; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self, BindingsError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(BindingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let entries = raw.parse::<Table>().map_err(|e| BindingsError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { entries })
    }

    /// Writes the table back, opaque fields included
    pub fn save(&self, path: &Path) -> Result<(), BindingsError> {
        let serialized = toml::to_string_pretty(&self.entries)
            .map_err(|e| BindingsError::Encode(e.to_string()))?;
        std::fs::write(path, serialized).map_err(|source| BindingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Key assigned to a trigger, if its entry carries one
    pub fn key_for(&self, trigger_id: &str) -> Option<char> {
        self.entries
            .get(trigger_id)?
            .get("key")?
            .as_str()?
            .chars()
            .next()
    }

    /// Fills default key assignments for triggers with no entry
    ///
    /// Existing entries are left untouched even when they lack a usable
    /// key field.
    pub fn fill_defaults(&mut self) {
        for (spec, default_key) in TRIGGERS.iter().zip(DEFAULT_KEYS) {
            if self.entries.contains_key(spec.id) {
                continue;
            }
            let mut entry = Table::new();
            entry.insert("key".to_string(), Value::String(default_key.to_string()));
            self.entries.insert(spec.id.to_string(), Value::Table(entry));
            debug!(id = spec.id, key = %default_key, "default binding assigned");
        }
    }

    /// Key-to-trigger map for the terminal key host
    pub fn key_map(&self) -> HashMap<char, &'static str> {
        TRIGGERS
            .iter()
            .filter_map(|spec| self.key_for(spec.id).map(|key| (key, spec.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn missing_file_loads_as_an_empty_store() {
        let path = temp_path("lookswitch_bindings_missing.toml");
        let _ = std::fs::remove_file(&path);

        let bindings = TriggerBindings::load(&path).expect("missing file is fine");
        assert_eq!(bindings.key_for("stage_main"), None);
    }

    #[test]
    fn fill_defaults_assigns_digit_keys_in_order() {
        let mut bindings = TriggerBindings::default();
        bindings.fill_defaults();

        for (spec, expected) in TRIGGERS.iter().zip(DEFAULT_KEYS) {
            assert_eq!(bindings.key_for(spec.id), Some(expected));
        }
    }

    #[test]
    fn fill_defaults_does_not_touch_existing_entries() {
        let mut bindings = TriggerBindings::default();
        bindings.entries.insert(
            "grid".to_string(),
            toml::toml! { key = "g" }.into(),
        );

        bindings.fill_defaults();

        assert_eq!(bindings.key_for("grid"), Some('g'));
        assert_eq!(bindings.key_for("stage_main"), Some('1'));
    }

    #[test]
    fn unknown_entries_and_fields_survive_a_round_trip() {
        let path = temp_path("lookswitch_bindings_roundtrip.toml");
        std::fs::write(
            &path,
            r#"
            [stage_main]
            key = "1"
            host_blob = "opaque-data-the-host-owns"

            [some_future_trigger]
            key = "x"
            weight = 3
            "#,
        )
        .expect("fixture write");

        let bindings = TriggerBindings::load(&path).expect("load");
        bindings.save(&path).expect("save");
        let reloaded = TriggerBindings::load(&path).expect("reload");

        assert_eq!(reloaded, bindings);
        assert_eq!(
            reloaded.entries["stage_main"]["host_blob"].as_str(),
            Some("opaque-data-the-host-owns")
        );
        assert_eq!(reloaded.entries["some_future_trigger"]["weight"].as_integer(), Some(3));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn key_map_inverts_the_bindings() {
        let mut bindings = TriggerBindings::default();
        bindings.fill_defaults();

        let map = bindings.key_map();
        assert_eq!(map.len(), 8);
        assert_eq!(map.get(&'1'), Some(&"stage_main"));
        assert_eq!(map.get(&'8'), Some(&"grid"));
    }

    #[test]
    fn entries_without_a_key_field_yield_no_binding() {
        let mut bindings = TriggerBindings::default();
        bindings.entries.insert(
            "stage_main".to_string(),
            toml::toml! { note = "bound elsewhere" }.into(),
        );

        assert_eq!(bindings.key_for("stage_main"), None);
        assert!(bindings.key_map().get(&'1').is_none());
    }
}
