// Rust guideline compliant 2026-10-14

//! Implementation of the record commands: `add`, `update`, `delete`, `list`
//! and `show`.
//!
//! Form fields arrive as `key=value` strings. They are collected into a JSON
//! object and deserialized into the section's record type, so list fields
//! accept the escaped comma-list text a form input would submit.

use super::{open_cache, open_site, print_json};
use crate::output::{OutputFormatter, RecordView};
use crate::terminal::print_success;
use anyhow::{Context, Result};
use folio_app::{require_session, AppError, Cached, ContentCache, SuccessEnvelope, Upload};
use folio_core::{BlobStore, Section};
use serde_json::{Map, Value};
use std::path::Path;

/// Fields the CLI never accepts through `--set`.
const RESERVED_FIELDS: [&str; 3] = ["id", "logo", "image"];

/// Parses `key=value` assignments into a JSON object of strings.
///
/// # Errors
///
/// Returns an error for malformed or reserved assignments.
pub fn parse_assignments(assignments: &[String]) -> Result<Map<String, Value>> {
    let mut fields = Map::new();
    for assignment in assignments {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(invalid(format!("Expected key=value, got '{}'", assignment)));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid(format!("Missing field name in '{}'", assignment)));
        }
        if RESERVED_FIELDS.contains(&key) {
            return Err(invalid(format!(
                "Field '{}' cannot be set directly; images are attached with --image",
                key
            )));
        }
        fields.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(fields)
}

fn invalid(message: String) -> anyhow::Error {
    AppError::InvalidInput(message).into()
}

fn read_image(path: &Path) -> Result<(Vec<u8>, String)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    Ok((bytes, filename))
}

/// Creates a record of type `T` from form assignments.
///
/// # Errors
///
/// Returns an error if the fields are invalid or the write fails.
pub fn add_record<T: Cached, B: BlobStore>(
    cache: &mut ContentCache<B>,
    assignments: &[String],
    image: Option<&Path>,
) -> Result<T> {
    let fields = parse_assignments(assignments)?;
    let record: T = serde_json::from_value(Value::Object(fields))
        .with_context(|| format!("Invalid {} fields", T::SECTION))?;

    let file = image.map(read_image).transpose()?;
    let upload = file
        .as_ref()
        .map(|(bytes, filename)| Upload { bytes, filename });
    Ok(cache.create(record, upload)?)
}

/// Merges form assignments into an existing record of type `T`.
///
/// Assigning an empty value clears optional fields.
///
/// # Errors
///
/// Returns an error if the ID does not resolve, nothing changes, the merged
/// fields are invalid, or the write fails.
pub fn update_record<T: Cached, B: BlobStore>(
    cache: &mut ContentCache<B>,
    id: &str,
    assignments: &[String],
    image: Option<&Path>,
) -> Result<T> {
    if assignments.is_empty() && image.is_none() {
        return Err(invalid(
            "Nothing to update. Pass --set key=value or --image PATH.".to_string(),
        ));
    }

    let full_id = cache.resolve_id::<T>(id)?;
    let current = cache
        .find::<T>(&full_id)
        .with_context(|| format!("{} {} disappeared from the cache", T::SECTION, full_id))?;

    let mut merged = serde_json::to_value(current)?;
    if let Value::Object(map) = &mut merged {
        map.extend(parse_assignments(assignments)?);
    }
    let record: T = serde_json::from_value(merged)
        .with_context(|| format!("Invalid {} fields", T::SECTION))?;

    let file = image.map(read_image).transpose()?;
    let upload = file
        .as_ref()
        .map(|(bytes, filename)| Upload { bytes, filename });
    Ok(cache.update(record, upload)?)
}

/// Deletes a record of type `T` by full or partial ID.
///
/// # Errors
///
/// Returns an error if the ID does not resolve or the write fails.
pub fn delete_record<T: Cached, B: BlobStore>(cache: &mut ContentCache<B>, id: &str) -> Result<T> {
    let full_id = cache.resolve_id::<T>(id)?;
    Ok(cache.delete::<T>(&full_id)?)
}

/// Executes `folio add`.
///
/// # Errors
///
/// Returns an error if no valid session exists or the record cannot be created.
pub fn add(
    root: Option<&Path>,
    section: Section,
    assignments: Vec<String>,
    image: Option<&Path>,
    formatter: &dyn OutputFormatter,
    json: bool,
) -> Result<()> {
    let (site, config) = open_site(root)?;
    require_session(&site)?;
    let mut cache = open_cache(&site, &config)?;

    let view = for_section!(section, T => {
        RecordView::from_record(&add_record::<T, _>(&mut cache, &assignments, image)?)
    });

    if json {
        return print_json(&SuccessEnvelope::for_section(section, view));
    }
    print_success(&format!("Created {} {}", section, view.id));
    print!("{}", formatter.format_record(&view));
    Ok(())
}

/// Executes `folio update`.
///
/// # Errors
///
/// Returns an error if no valid session exists or the record cannot be updated.
pub fn update(
    root: Option<&Path>,
    section: Section,
    id: &str,
    assignments: Vec<String>,
    image: Option<&Path>,
    formatter: &dyn OutputFormatter,
    json: bool,
) -> Result<()> {
    let (site, config) = open_site(root)?;
    require_session(&site)?;
    let mut cache = open_cache(&site, &config)?;

    let view = for_section!(section, T => {
        RecordView::from_record(&update_record::<T, _>(&mut cache, id, &assignments, image)?)
    });

    if json {
        return print_json(&SuccessEnvelope::for_section(section, view));
    }
    print_success(&format!("Updated {} {}", section, view.id));
    print!("{}", formatter.format_record(&view));
    Ok(())
}

/// Executes `folio delete`.
///
/// # Errors
///
/// Returns an error if no valid session exists or the record cannot be deleted.
pub fn delete(root: Option<&Path>, section: Section, id: &str, json: bool) -> Result<()> {
    let (site, config) = open_site(root)?;
    require_session(&site)?;
    let mut cache = open_cache(&site, &config)?;

    let view = for_section!(section, T => {
        RecordView::from_record(&delete_record::<T, _>(&mut cache, id)?)
    });

    if json {
        return print_json(&SuccessEnvelope::for_section(section, view));
    }
    print_success(&format!("Deleted {} {} ({})", section, view.id, view.title));
    Ok(())
}

/// Executes `folio list`.
///
/// # Errors
///
/// Returns an error if the site cannot be opened or read.
pub fn list(root: Option<&Path>, section: Section, formatter: &dyn OutputFormatter) -> Result<()> {
    let (site, config) = open_site(root)?;
    let cache = open_cache(&site, &config)?;

    let views = for_section!(section, T => RecordView::from_records(cache.get::<T>()));
    println!("{}", formatter.format_list(section, &views));
    Ok(())
}

/// Executes `folio show`.
///
/// # Errors
///
/// Returns an error if the ID does not resolve.
pub fn show(
    root: Option<&Path>,
    section: Section,
    id: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let (site, config) = open_site(root)?;
    let cache = open_cache(&site, &config)?;

    let view = for_section!(section, T => {
        let full_id = cache.resolve_id::<T>(id)?;
        let record = cache
            .find::<T>(&full_id)
            .with_context(|| format!("{} {} not found", section, full_id))?;
        RecordView::from_record(record)
    });

    println!("{}", formatter.format_record(&view));
    Ok(())
}
