// Rust guideline compliant 2026-10-14

//! Implementation of the `folio init` command.
//!
//! Creates the `.folio` directory with one empty collection file per section,
//! the blob directory and a default `config.toml`.

use crate::terminal::{print_info, print_success};
use anyhow::Result;
use folio_app::SiteContext;
use folio_core::Config;
use std::path::Path;

/// Initializes a site at `root` (default: the current directory).
///
/// Existing content and config are left untouched, so running it twice is
/// safe.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn execute(root: Option<&Path>, owner: Option<String>, title: Option<String>) -> Result<()> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let mut config = Config::default();
    if let Some(owner) = owner {
        config.owner_name = owner;
    }
    if let Some(title) = title {
        config.site_title = title;
    }

    let (site, wrote_config) = SiteContext::init(&root, &config)?;

    print_success(&format!("Folio site initialized at {}", site.folio_dir().display()));
    println!("  - Content: {}", site.content_dir().display());
    println!("  - Blobs:   {}", site.blob_dir().display());
    if wrote_config {
        println!("  - Created {}", site.config_path().display());
        print_info("Set admin_email and admin_password_sha256 (see 'folio passwd') to enable editing.");
    } else {
        println!("  - Kept existing {}", site.config_path().display());
    }

    Ok(())
}
