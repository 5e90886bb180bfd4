use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::StorageError;
use crate::model::{Item, SubmissionRecord};

/// File name of the config file inside the app's config directory.
const CONFIG_FILE: &str = "config.json";

/// On-disk shape of the config file.
///
/// Keys other than `items` are carried through untouched so that rewriting
/// the file never drops settings this crate does not know about.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

/// Destination for submitted add-form records.
pub trait ItemSink {
    /// Persists one submitted record.
    fn append(&mut self, record: SubmissionRecord) -> Result<(), StorageError>;
}

/// Owns the list of saved items and the config file they live in.
///
/// A single store is created at startup and handed to every screen that
/// reads or writes items.
#[derive(Debug)]
pub struct ItemStore {
    path: PathBuf,
    items: Vec<Item>,
    other: Map<String, Value>,
}

impl ItemStore {
    /// Opens the store in the platform config directory.
    ///
    /// Uses `~/.config/keycheat/config.json` on Linux; the directory is
    /// created if it does not already exist.
    pub fn new() -> Result<Self, StorageError> {
        let config_dir = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
        Self::open(config_dir.join("keycheat").join(CONFIG_FILE))
    }

    /// Opens the store backed by the given file.
    ///
    /// A missing file is treated as an empty store and is only created on
    /// the first append.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config = read_config(&path)?;
        Ok(Self {
            path,
            items: config.items,
            other: config.other,
        })
    }

    /// Returns the path of the backing config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all items in the order they were added.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Re-reads all items from disk, replacing the in-memory list.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        let config = read_config(&self.path)?;
        self.items = config.items;
        self.other = config.other;
        Ok(())
    }
}

impl ItemSink for ItemStore {
    /// Adds the record as a new item and rewrites the config file.
    ///
    /// The file is re-read first so edits made on disk since the last load
    /// are kept. If it cannot be read or parsed the file is left untouched
    /// and the error is returned. On failure the in-memory list is left as
    /// it was before the call.
    fn append(&mut self, record: SubmissionRecord) -> Result<(), StorageError> {
        let item = Item::from(record);
        tracing::info!(title = %item.title, tag = %item.tag, "appending item");
        let mut config = read_config(&self.path)?;
        config.items.push(item);
        write_config(&self.path, &config)?;
        self.items = config.items;
        self.other = config.other;
        Ok(())
    }
}

/// Writes the full config file.
fn write_config(path: &Path, config: &ConfigFile) -> Result<(), StorageError> {
    let mut file = fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, config)?;
    writeln!(file)?;
    Ok(())
}

/// Reads the config file; a missing or blank file yields an empty config.
fn read_config(path: &Path) -> Result<ConfigFile, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(e) => return Err(e.into()),
    };
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(serde_json::from_str(&contents)?)
}
