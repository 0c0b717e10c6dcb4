//! Persisted display settings and the inbound configuration channel.
//!
//! The face has exactly one user-facing setting, the hour-tick ring toggle.
//! It arrives as a key-value message from the companion side (the simulator
//! fakes one on a key press), is applied immediately, and is persisted as a
//! small TOML blob so it survives restarts.
//!
//! Storage failures are never fatal: a missing or corrupt blob falls back to
//! defaults and a failed save only logs. The face must keep rendering with
//! whatever settings it has.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Message key carrying the config page version string. Sent alongside every
/// push; the face ignores it.
pub const CONFIG_VERSION_KEY: u32 = 0;

/// Message key carrying the tick-ring toggle as an integer (1 = on).
pub const SHOW_TICKS_KEY: u32 = 1;

/// User-configurable display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the twelve hour-tick dots outside the earth orbit.
    pub show_ticks: bool,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or unreadable as TOML.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                warn!("could not read settings from {}: {err}", path.display());
                return Self::default();
            }
        };
        match toml::from_str(&text) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("corrupt settings in {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Persist settings to `path` as TOML.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let text = toml::to_string(self).map_err(io::Error::other)?;
        fs::write(path, text)
    }

    /// Apply one inbound message.
    ///
    /// Only an integer under [`SHOW_TICKS_KEY`] is recognized: 1 enables the
    /// tick ring, any other value disables it. An absent key or a value of
    /// the wrong type leaves the settings untouched. Returns whether a
    /// recognized entry was applied, in which case the caller should persist.
    pub fn apply_message(&mut self, message: &InboxMessage) -> bool {
        match message.find(SHOW_TICKS_KEY) {
            Some(MessageValue::Int(value)) => {
                self.show_ticks = *value == 1;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Inbound Messages
// =============================================================================

/// One value in a key-value configuration message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValue {
    /// Integer payload; booleans arrive as 0/1.
    Int(i32),
    /// String payload.
    Text(String),
}

/// An inbound key-value configuration message.
///
/// Entries keep their arrival order; lookups return the first match so a
/// duplicated key behaves the same as in the transport it models.
#[derive(Debug, Clone, Default)]
pub struct InboxMessage {
    entries: Vec<(u32, MessageValue)>,
}

impl InboxMessage {
    /// Empty message.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry, builder style.
    #[must_use]
    pub fn with_entry(mut self, key: u32, value: MessageValue) -> Self {
        self.entries.push((key, value));
        self
    }

    /// First value stored under `key`, if any.
    pub fn find(&self, key: u32) -> Option<&MessageValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("orbit-face-{}-{name}.toml", std::process::id()))
    }

    // -------------------------------------------------------------------------
    // Persistence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_hides_ticks() {
        assert!(!Settings::default().show_ticks);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/orbit-face.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let settings = Settings { show_ticks: true };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_corrupt_file_gives_defaults() {
        let path = temp_path("corrupt");
        fs::write(&path, "show_ticks = \"maybe\" [[[").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_tolerates_unknown_fields() {
        let path = temp_path("extra");
        fs::write(&path, "show_ticks = true\nfuture_option = 3\n").unwrap();
        assert!(Settings::load(&path).show_ticks);
        let _ = fs::remove_file(&path);
    }

    // -------------------------------------------------------------------------
    // Message Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_message_enables_ticks_on_one() {
        let mut settings = Settings::default();
        let msg = InboxMessage::new().with_entry(SHOW_TICKS_KEY, MessageValue::Int(1));
        assert!(settings.apply_message(&msg));
        assert!(settings.show_ticks);
    }

    #[test]
    fn test_message_disables_ticks_on_any_other_int() {
        for value in [0, 2, -1, 255] {
            let mut settings = Settings { show_ticks: true };
            let msg = InboxMessage::new().with_entry(SHOW_TICKS_KEY, MessageValue::Int(value));
            assert!(settings.apply_message(&msg));
            assert!(!settings.show_ticks, "int {value} should disable ticks");
        }
    }

    #[test]
    fn test_message_with_wrong_type_is_ignored() {
        let mut settings = Settings { show_ticks: true };
        let msg = InboxMessage::new()
            .with_entry(SHOW_TICKS_KEY, MessageValue::Text("yes".to_string()));
        assert!(!settings.apply_message(&msg));
        assert!(settings.show_ticks, "unrecognized value must not clobber the setting");
    }

    #[test]
    fn test_message_with_unknown_key_is_ignored() {
        let mut settings = Settings { show_ticks: true };
        let msg = InboxMessage::new().with_entry(99, MessageValue::Int(0));
        assert!(!settings.apply_message(&msg));
        assert!(settings.show_ticks);
    }

    #[test]
    fn test_message_first_entry_wins_on_duplicate_keys() {
        let mut settings = Settings::default();
        let msg = InboxMessage::new()
            .with_entry(SHOW_TICKS_KEY, MessageValue::Int(1))
            .with_entry(SHOW_TICKS_KEY, MessageValue::Int(0));
        assert!(settings.apply_message(&msg));
        assert!(settings.show_ticks);
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let mut settings = Settings::default();
        assert!(!settings.apply_message(&InboxMessage::new()));
    }
}
