//! Versioned save files.
//!
//! The on-disk format is `{ "version": 1, "state": SaveState }`. Files
//! holding a bare `SaveState` (written before versioning) still load.
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write never leaves a truncated save behind.

use crate::error::{IoError, Result};
use crate::serialization::{from_json, to_json_pretty};
use garden_core::StateStore;
use garden_data::SaveState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const CURRENT_SAVE_VERSION: u32 = 1;

/// Holds a reference to the state to avoid cloning on save.
#[derive(Serialize)]
struct SaveFileRef<'a> {
    version: u32,
    state: &'a SaveState,
}

#[derive(Deserialize)]
struct SaveFile {
    version: u32,
    state: SaveState,
}

pub fn save_state(state: &SaveState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_pretty(&SaveFileRef {
        version: CURRENT_SAVE_VERSION,
        state,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));
    fs::write(&tmp, json)
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|e| {
            let _ = fs::remove_file(&tmp);
            IoError::FileSystem(e).with_context(format!("writing save file {:?}", path))
        })
}

pub fn load_state(path: impl AsRef<Path>) -> Result<SaveState> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("reading save file {:?}", path)))?;

    match from_json::<SaveFile>(&content) {
        Ok(file) => match file.version {
            CURRENT_SAVE_VERSION => Ok(file.state),
            v if v > CURRENT_SAVE_VERSION => Err(IoError::UnsupportedVersion {
                found: v,
                supported: CURRENT_SAVE_VERSION,
            }),
            v => Err(IoError::validation(format!("Unsupported save version: {v}"))),
        },
        Err(_) => {
            tracing::info!("Failed to load as versioned save, attempting legacy load...");
            let state = from_json::<SaveState>(&content)
                .map_err(|e| e.with_context("deserializing legacy save file"))?;
            tracing::info!("Legacy save loaded successfully");
            Ok(state)
        }
    }
}

/// JSON file backing for a [`Session`](garden_core::Session).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> anyhow::Result<Option<SaveState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(load_state(&self.path)?))
    }

    fn save(&self, state: &SaveState) -> anyhow::Result<()> {
        save_state(state, &self.path)?;
        Ok(())
    }
}
