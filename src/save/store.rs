//! Save store for handling save/load operations
//!
//! This module provides the SaveStore struct which handles:
//! - Creating new saves from a name and a seed
//! - Overwriting a save with an in-memory record
//! - Loading a save by file name
//! - Listing the saves present in the save directory

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct SaveStore {
    save_directory: PathBuf,
    extension: String,
}

impl SaveStore {
    /// Creates a new SaveStore over the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>, extension: &str) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
            info!("Created save directory {}", save_dir.display());
        }

        Ok(SaveStore {
            save_directory: save_dir,
            extension: extension.trim_start_matches('.').to_string(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.save_directory
    }

    /// File name for a save name: the name plus the extension
    pub fn file_name(&self, save_name: &str) -> String {
        format!("{}.{}", save_name, self.extension)
    }

    /// Save name shown for a file name, if the file is one of ours
    pub fn save_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
    }

    /// Write a fresh save, overwriting any save with the same name
    ///
    /// Name and seed are trimmed; nothing else is validated, so an empty
    /// name gives `.<extension>`. Returns the file name written.
    pub fn create(&self, save_name: &str, seed: &str) -> Result<String, SaveError> {
        let file_name = self.file_name(save_name.trim());
        self.write(&file_name, &SaveRecord::new(seed.trim()))?;
        info!("Created new save file: {} with seed {}", file_name, seed.trim());
        Ok(file_name)
    }

    /// Overwrite `file_name` with `record`
    pub fn write(&self, file_name: &str, record: &SaveRecord) -> Result<PathBuf, SaveError> {
        let filepath = self.save_directory.join(file_name);

        // Pretty format for readability/hand editing
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&filepath, json)?;

        info!("Saved to: {}", filepath.display());

        Ok(filepath)
    }

    /// Load a save file by file name
    pub fn load(&self, file_name: &str) -> Result<SaveRecord, SaveError> {
        let filepath = self.save_directory.join(file_name);

        if !filepath.exists() {
            return Err(SaveError::NotFound(file_name.to_string()));
        }

        let json = fs::read_to_string(&filepath)?;
        let record: SaveRecord = serde_json::from_str(&json)?;

        info!("Loaded save file: {}", file_name);

        Ok(record)
    }

    /// Load a save file, reporting failures as "no record"
    pub fn try_load(&self, file_name: &str) -> Option<SaveRecord> {
        match self.load(file_name) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Could not load {}: {}", file_name, e);
                None
            }
        }
    }

    /// Names of all saves in the directory, sorted
    pub fn list(&self) -> Result<Vec<String>, SaveError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.save_directory)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                if let Some(name) = self.save_name(file_name) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();

        Ok(names)
    }
}
