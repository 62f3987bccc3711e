// Rust guideline compliant 2026-10-14

//! Implementation of the `folio status` command.
//!
//! Shows record counts per section, the admin session and the last commit.

use super::{open_cache, open_site, print_json};
use crate::git::{last_commit, CommitInfo};
use anyhow::Result;
use chrono::Utc;
use folio_app::{current_user, SiteContent};
use folio_core::Section;
use serde::Serialize;
use std::path::Path;

/// Snapshot of the site state.
#[derive(Debug, Serialize)]
pub struct SiteStatus {
    /// Site title from config.
    pub site_title: String,
    /// Record count per section, in page order.
    pub counts: Vec<(Section, usize)>,
    /// Signed-in admin with a live session.
    pub signed_in_as: Option<String>,
    /// Most recent commit.
    pub last_commit: Option<CommitInfo>,
}

impl SiteStatus {
    /// Builds the counts from cached content.
    pub fn new(
        site_title: String,
        content: &SiteContent,
        signed_in_as: Option<String>,
        last_commit: Option<CommitInfo>,
    ) -> Self {
        Self {
            site_title,
            counts: Section::ALL
                .iter()
                .map(|section| (*section, content.count(*section)))
                .collect(),
            signed_in_as,
            last_commit,
        }
    }

    /// Total number of records.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Executes `folio status`.
///
/// # Errors
///
/// Returns an error if the site cannot be read.
pub fn execute(root: Option<&Path>, json: bool) -> Result<()> {
    let (site, config) = open_site(root)?;
    let cache = open_cache(&site, &config)?;
    let signed_in_as = current_user(&site)?
        .filter(|session| !session.is_expired_at(Utc::now()))
        .map(|session| session.user);
    let status = SiteStatus::new(
        config.site_title.clone(),
        cache.content(),
        signed_in_as,
        last_commit(site.root(), config.repository_url.as_deref()),
    );

    if json {
        return print_json(&status);
    }

    println!("{}", status.site_title);
    println!("{}", "-".repeat(status.site_title.chars().count().max(5)));
    for (section, count) in &status.counts {
        println!("{:<15}{}", section.heading(), count);
    }
    println!("{:<15}{}", "Total", status.total());
    println!();
    println!(
        "Admin session: {}",
        status.signed_in_as.as_deref().unwrap_or("none")
    );
    match &status.last_commit {
        Some(commit) => println!(
            "Last updated:  {} {} ({})",
            commit.date.format("%Y-%m-%d"),
            commit.short_sha(),
            commit.message
        ),
        None => println!("Last updated:  unknown"),
    }
    Ok(())
}
