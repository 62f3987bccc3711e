// Rust guideline compliant 2026-10-14

//! Command implementations for the Folio CLI.

use anyhow::Result;
use folio_app::{ContentCache, SiteContext};
use folio_core::Config;
use serde::Serialize;
use std::path::Path;

/// Runs `$body` with `$ty` bound to the record type of `$section`.
macro_rules! for_section {
    ($section:expr, $ty:ident => $body:expr) => {
        match $section {
            folio_core::Section::Experience => {
                type $ty = folio_core::Experience;
                $body
            }
            folio_core::Section::Education => {
                type $ty = folio_core::Education;
                $body
            }
            folio_core::Section::Organizations => {
                type $ty = folio_core::Organization;
                $body
            }
            folio_core::Section::Projects => {
                type $ty = folio_core::Project;
                $body
            }
            folio_core::Section::Certificates => {
                type $ty = folio_core::Certificate;
                $body
            }
            folio_core::Section::Contacts => {
                type $ty = folio_core::Contact;
                $body
            }
        }
    };
}

pub mod auth;
pub mod content;
pub mod init;
pub mod period;
pub mod render;
pub mod status;
pub mod tokens;

/// Discovers the site and loads its configuration.
///
/// # Errors
///
/// Returns an error if the site is not initialized or its config is invalid.
pub fn open_site(root: Option<&Path>) -> Result<(SiteContext, Config)> {
    let site = SiteContext::discover(root)?;
    let config = site.load_config()?;
    Ok((site, config))
}

/// Loads every section of the site into a content cache.
///
/// # Errors
///
/// Returns an error if a collection cannot be read.
pub fn open_cache(site: &SiteContext, config: &Config) -> Result<ContentCache> {
    Ok(ContentCache::load(
        site.open_storage()?,
        site.open_blob_store(config),
    )?)
}

/// Prints a value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
