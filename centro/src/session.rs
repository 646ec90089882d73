//! Trainer session storage: one optional identifier in a JSON file.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `treinador_id` key is written by the login flow; the field name is
/// part of the on-disk contract, not ours to rename.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
struct SessionFile {
    #[serde(default)]
    treinador_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Resolution order: `CENTRO_SESSION_PATH`, then `XDG_CONFIG_HOME`,
    /// then `~/.config`, falling back to the working directory.
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("CENTRO_SESSION_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("centro-pokemon");
        path.push("session.json");
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing or corrupt session files read as logged out.
    pub fn load(&self) -> Option<String> {
        let bytes = fs::read(&self.path).ok()?;
        serde_json::from_slice::<SessionFile>(&bytes).ok()?.treinador_id
    }

    pub fn save(&self, trainer_id: &str) -> Result<(), SessionError> {
        let file = SessionFile {
            treinador_id: Some(trainer_id.to_string()),
        };
        self.write(&file)
    }

    /// Clearing an already-absent identifier is a no-op.
    pub fn clear(&self) -> Result<(), SessionError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.write(&SessionFile::default())
    }

    fn write(&self, file: &SessionFile) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
