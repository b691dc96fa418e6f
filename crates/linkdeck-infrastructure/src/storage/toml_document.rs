//! Atomic single-document TOML storage.
//!
//! Each collection lives in one TOML file. Writes go through a temporary
//! file plus atomic rename with an explicit fsync, and updates take an
//! exclusive `fs2` lock so concurrent processes cannot interleave a
//! read-modify-write.

use linkdeck_core::{LinkdeckError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A handle to one TOML document on disk.
pub struct TomlDocument<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> TomlDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Creates a handle for the document at `path`. The file need not
    /// exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _phantom: PhantomData,
        }
    }

    /// Loads the document, or the default value when the file is missing
    /// or empty.
    pub fn load(&self) -> Result<T> {
        if !self.path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(toml::from_str(&content)?)
    }

    /// Runs a read-modify-write transaction under an exclusive file lock.
    ///
    /// The closure may fail, in which case nothing is written. On success
    /// the new document is saved atomically and the closure's value is
    /// returned.
    pub fn update<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> Result<R>,
    {
        let _lock = DocumentLock::acquire(&self.path)?;
        let mut data = self.load()?;
        let result = f(&mut data)?;
        self.save(&data)?;
        Ok(result)
    }

    /// Saves the document via tmp file + atomic rename.
    fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = toml::to_string_pretty(data)?;
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(serialized.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| LinkdeckError::io("document path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| LinkdeckError::io("document path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on a document, released when the handle drops.
///
/// The `.lock` file persists beside the document; unlinking it on release
/// would let a waiter keep a lock on a dead inode while a newcomer locks a
/// fresh one.
struct DocumentLock {
    #[allow(dead_code)]
    file: File,
}

impl DocumentLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| LinkdeckError::io(format!("failed to acquire document lock: {}", e)))?;
        }

        Ok(Self { file })
    }
}
