// Rust guideline compliant 2026-10-12

//! Document storage for portfolio collections.
//!
//! Every section lives in its own JSONL file inside the content directory.
//! Reads stream the file line by line; writes rewrite the whole collection
//! through a temp file and an atomic rename while holding a per-section lock.

use crate::{identity, Error, Record, Result, Section};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage engine for portfolio documents.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Directory holding one JSONL file per section.
    dir: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing the collection files
    ///
    /// # Returns
    ///
    /// A new Storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the content directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the JSONL path of a section.
    pub fn collection_path(&self, section: Section) -> PathBuf {
        self.dir.join(section.file_name())
    }

    /// Creates empty collection files for every section that lacks one.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be created.
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        for section in Section::ALL {
            let path = self.collection_path(section);
            if !path.exists() {
                std::fs::File::create(&path)?;
            }
        }
        Ok(())
    }
}

impl Storage {
    /// Loads every record of a section.
    ///
    /// Blank lines are ignored; malformed lines are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - A record fails validation
    pub fn list<T: Record>(&self) -> Result<Vec<T>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let path = self.collection_path(T::SECTION);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&path)?);
        let mut records = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(&line) {
                Ok(record) => {
                    record.validate()?;
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!(
                        section = %T::SECTION,
                        line = number + 1,
                        "Skipping malformed JSON line: {}",
                        e
                    );
                }
            }
        }

        tracing::debug!(section = %T::SECTION, count = records.len(), "Loaded collection");
        Ok(records)
    }

    /// Loads a single record by exact ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no record has the ID.
    pub fn get<T: Record>(&self, id: &str) -> Result<T> {
        self.list::<T>()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::NotFound(format!("{} {}", T::SECTION, id)))
    }

    /// Resolves a full or partial ID within a section.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` or `Error::AmbiguousId`.
    pub fn resolve_id<T: Record>(&self, partial: &str) -> Result<String> {
        let records = self.list::<T>()?;
        identity::resolve_partial_id(partial, records.iter().map(|r| r.id()))
    }
}

impl Storage {
    /// Adds a new record to its collection.
    ///
    /// An empty ID is replaced with a freshly generated one.
    ///
    /// # Returns
    ///
    /// The stored record, including its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record fails validation
    /// - A record with the same ID exists
    /// - The file cannot be written
    pub fn create<T: Record>(&self, mut record: T) -> Result<T> {
        self.with_lock(T::SECTION, || {
            let mut records = self.list::<T>()?;

            if record.id().is_empty() {
                let now = unix_now();
                let mut nonce = 0u32;
                let id = loop {
                    let id = identity::generate_id(T::PREFIX, record.title(), now, nonce);
                    if !records.iter().any(|r| r.id() == id) {
                        break id;
                    }
                    nonce = nonce.saturating_add(1);
                };
                record.set_id(id);
            } else if records.iter().any(|r| r.id() == record.id()) {
                return Err(Error::Duplicate(record.id().to_string()));
            }

            record.validate()?;
            records.push(record.clone());
            self.save_all(&records)?;
            tracing::debug!(section = %T::SECTION, id = record.id(), "Created record");
            Ok(record)
        })
    }

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record fails validation
    /// - No record has the same ID
    /// - The file cannot be written
    pub fn update<T: Record>(&self, record: &T) -> Result<()> {
        record.validate()?;
        self.with_lock(T::SECTION, || {
            let mut records = self.list::<T>()?;
            let slot = records
                .iter_mut()
                .find(|r| r.id() == record.id())
                .ok_or_else(|| Error::NotFound(format!("{} {}", T::SECTION, record.id())))?;
            *slot = record.clone();
            self.save_all(&records)?;
            tracing::debug!(section = %T::SECTION, id = record.id(), "Updated record");
            Ok(())
        })
    }

    /// Deletes a record by ID.
    ///
    /// # Returns
    ///
    /// The removed record.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no record has the ID, or an IO error if
    /// the file cannot be rewritten.
    pub fn delete<T: Record>(&self, id: &str) -> Result<T> {
        self.with_lock(T::SECTION, || {
            let mut records = self.list::<T>()?;
            let pos = records
                .iter()
                .position(|r| r.id() == id)
                .ok_or_else(|| Error::NotFound(format!("{} {}", T::SECTION, id)))?;
            let removed = records.remove(pos);
            self.save_all(&records)?;
            tracing::debug!(section = %T::SECTION, id, "Deleted record");
            Ok(removed)
        })
    }

    /// Replaces an entire collection.
    ///
    /// Uses atomic write operations (temp file + rename) to ensure consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails validation or the file cannot be
    /// written.
    pub fn save_all<T: Record>(&self, records: &[T]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for record in records {
            record.validate()?;
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.collection_path(T::SECTION);
        let temp_path = path.with_extension("jsonl.tmp");

        {
            let mut file = File::create(&temp_path)?;
            for record in records {
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }

    /// Executes a closure with an exclusive lock on a section.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is held elsewhere or the closure fails.
    pub fn with_lock<F, R>(&self, section: Section, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        std::fs::create_dir_all(&self.dir)?;
        let lock_path = self.collection_path(section).with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock on {}: {}", section, e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
