use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::KeyValueStorage;

/// Stores each key as `<key>.json` inside a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// failed write never leaves a truncated state file behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.dir))?;
            info!("Created data directory: {:?}", self.dir);
        }
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        debug!("Loading {} from {:?}", key, path);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read state file: {:?}", path)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        debug!("Saving {} to {:?}", key, path);

        fs::write(&tmp_path, value)
            .with_context(|| format!("Failed to write state file: {:?}", tmp_path))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to replace state file: {:?}", path))?;
        Ok(())
    }
}
