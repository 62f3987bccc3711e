// Rust guideline compliant 2026-10-14

//! Site discovery and path management utilities.

use crate::error::{AppError, Result};
use folio_core::{Config, FsBlobStore, Storage};
use std::path::{Path, PathBuf};

/// Name of the directory that marks a Folio site.
pub const FOLIO_DIR: &str = ".folio";

/// Path metadata for a Folio site.
#[derive(Debug, Clone)]
pub struct SiteContext {
    root: PathBuf,
    folio_dir: PathBuf,
    content_dir: PathBuf,
    blob_dir: PathBuf,
    session_path: PathBuf,
    config_path: PathBuf,
}

impl SiteContext {
    /// Builds the context for `root` without checking that it exists.
    pub fn at(root: &Path) -> Self {
        let folio_dir = root.join(FOLIO_DIR);
        Self {
            root: root.to_path_buf(),
            content_dir: folio_dir.join("content"),
            blob_dir: folio_dir.join("blobs"),
            session_path: folio_dir.join("session.json"),
            config_path: folio_dir.join("config.toml"),
            folio_dir,
        }
    }

    /// Discovers a Folio site starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `site_root` - Optional site root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.folio` directory is missing
    pub fn discover(site_root: Option<&Path>) -> Result<Self> {
        let root = match site_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(&root);
        if !context.folio_dir.exists() {
            return Err(AppError::SiteNotInitialized {
                path: context.folio_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.folio` layout and a default config when missing.
    ///
    /// # Returns
    ///
    /// The context and whether a new config file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    pub fn init(root: &Path, config: &Config) -> Result<(Self, bool)> {
        let context = Self::at(root);
        std::fs::create_dir_all(&context.folio_dir)?;
        std::fs::create_dir_all(&context.blob_dir)?;
        context.open_storage()?.init()?;

        let wrote_config = !context.config_path.exists();
        if wrote_config {
            config.save(&context.folio_dir)?;
        }
        tracing::info!(root = %root.display(), "Initialized site");
        Ok((context, wrote_config))
    }

    /// Returns the site root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.folio` directory path.
    #[must_use]
    pub fn folio_dir(&self) -> &Path {
        self.folio_dir.as_path()
    }

    /// Returns the directory holding the collection files.
    #[must_use]
    pub fn content_dir(&self) -> &Path {
        self.content_dir.as_path()
    }

    /// Returns the blob directory path.
    #[must_use]
    pub fn blob_dir(&self) -> &Path {
        self.blob_dir.as_path()
    }

    /// Returns the admin session file path.
    #[must_use]
    pub fn session_path(&self) -> &Path {
        self.session_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the document store.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.content_dir.clone())?)
    }

    /// Opens the blob store, serving files under the configured base URL.
    #[must_use]
    pub fn open_blob_store(&self, config: &Config) -> FsBlobStore {
        FsBlobStore::new(self.blob_dir.clone(), config.blob_base_url.clone())
    }

    /// Loads site configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.folio_dir())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_missing_site() {
        let temp_dir = TempDir::new().unwrap();
        let err = SiteContext::discover(Some(temp_dir.path())).unwrap_err();
        assert!(matches!(err, AppError::SiteNotInitialized { .. }));
    }

    #[test]
    fn test_init_then_discover() {
        let temp_dir = TempDir::new().unwrap();
        let (_, wrote) = SiteContext::init(temp_dir.path(), &Config::default()).unwrap();
        assert!(wrote);

        let site = SiteContext::discover(Some(temp_dir.path())).unwrap();
        assert!(site.config_path().exists());
        assert!(site.blob_dir().is_dir());
        assert!(site.content_dir().join("projects.jsonl").exists());

        let (_, wrote_again) = SiteContext::init(temp_dir.path(), &Config::default()).unwrap();
        assert!(!wrote_again);
    }
}
