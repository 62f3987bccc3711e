// Rust guideline compliant 2026-10-14

//! Implementation of the `folio render` command.

use super::{open_cache, open_site};
use crate::git::last_commit;
use crate::render::render_page;
use crate::terminal::print_success;
use anyhow::{Context, Result};
use std::path::Path;

/// Renders the site to Markdown, writing to `output` or stdout.
///
/// # Errors
///
/// Returns an error if the site cannot be read or the output cannot be written.
pub fn execute(root: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let (site, config) = open_site(root)?;
    let cache = open_cache(&site, &config)?;
    let commit = last_commit(site.root(), config.repository_url.as_deref());
    let page = render_page(&config, cache.content(), commit.as_ref());

    match output {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_success(&format!("Rendered {}", path.display()));
        }
        None => print!("{}", page),
    }
    Ok(())
}
