//! Persisted display preferences.
//!
//! Exactly two values survive restarts: the selected group and the
//! dark-mode flag. They live in a small JSON file read once at startup and
//! rewritten on every change; there is only ever one writer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name used under the home directory.
const PREFS_FILE: &str = ".timetable_prefs.json";

/// User display preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Group whose schedule the daily/weekly views show by default.
    #[serde(default)]
    pub selected_group: Option<String>,

    /// Dark color scheme toggle. Stored for the rendering layer; nothing in
    /// the derivations reads it.
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    /// Default on-disk location: `$HOME/.timetable_prefs.json`, falling
    /// back to the working directory when no home is set.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => PathBuf::from(home).join(PREFS_FILE),
            _ => PathBuf::from(PREFS_FILE),
        }
    }

    /// Loads preferences from `path`.
    ///
    /// A missing file is the normal first-run case and yields defaults
    /// silently; an unreadable or corrupt file also yields defaults but is
    /// logged, since losing a preference beats refusing to start.
    pub fn load(path: &Path) -> Preferences {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Preferences::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read preferences, using defaults");
                return Preferences::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt preferences file, using defaults");
                Preferences::default()
            }
        }
    }

    /// Writes the preferences to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}
