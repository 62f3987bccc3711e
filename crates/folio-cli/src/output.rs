// Rust guideline compliant 2026-10-14

//! Output formatting module for the Folio CLI.
//!
//! Records of every section are first flattened into a [`RecordView`] and
//! then rendered as JSON, a table, or plain text.

use crate::terminal::wrap_text;
use folio_core::{calculate_period, calculate_short_period, Record, Section};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

const LABEL_WIDTH: usize = 15;

/// Section-independent view of a record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    /// Section the record belongs to.
    pub section: Section,
    /// Record ID.
    pub id: String,
    /// Main display line.
    pub title: String,
    /// Secondary display line.
    pub subtitle: String,
    /// Short period label, empty for undated records.
    pub period: String,
    /// Detailed period label, empty for undated records.
    pub period_detailed: String,
    /// Image URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Labeled fields for detail views.
    #[serde(skip)]
    pub fields: Vec<(&'static str, String)>,
    /// The stored document.
    pub record: serde_json::Value,
}

impl RecordView {
    /// Builds a view of a record, computing its period labels as of now.
    pub fn from_record<T: Record>(record: &T) -> Self {
        let (period, period_detailed) = match record.timeframe() {
            Some((start, end)) => (
                calculate_short_period(Some(start), end),
                calculate_period(Some(start), end),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            section: T::SECTION,
            id: record.id().to_string(),
            title: record.title().to_string(),
            subtitle: record.subtitle(),
            period,
            period_detailed,
            image: record.image().map(|blob| blob.url.clone()),
            fields: record.display_fields(),
            record: serde_json::to_value(record).unwrap_or(serde_json::Value::Null),
        }
    }

    /// Builds views for a slice of records.
    pub fn from_records<T: Record>(records: &[T]) -> Vec<Self> {
        records.iter().map(Self::from_record).collect()
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting Folio records in different output formats.
pub trait OutputFormatter {
    /// Formats a single record for display.
    fn format_record(&self, view: &RecordView) -> String;

    /// Formats the records of one section for display.
    fn format_list(&self, section: Section, views: &[RecordView]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats records as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, view: &RecordView) -> String {
        serde_json::to_string_pretty(view)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize record" }).to_string())
    }

    fn format_list(&self, section: Section, views: &[RecordView]) -> String {
        let output = json!({
            "section": section,
            "records": views,
            "total": views.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize record list" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_record(&self, view: &RecordView) -> String {
        let mut output = String::new();
        push_line(&mut output, "ID", &view.id);
        for (label, value) in &view.fields {
            if !value.is_empty() {
                push_line(&mut output, label, value);
            }
        }
        if !view.period_detailed.is_empty() {
            push_line(&mut output, "Period", &view.period_detailed);
        }
        if let Some(image) = &view.image {
            push_line(&mut output, "Image", image);
        }
        output
    }

    fn format_list(&self, section: Section, views: &[RecordView]) -> String {
        if views.is_empty() {
            return format!("No {} records found.", section);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Title", "Details", "Period"]);

        for view in views {
            builder.push_record(vec![
                view.id.as_str(),
                view.title.as_str(),
                view.subtitle.as_str(),
                view.period.as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

fn push_line(output: &mut String, label: &str, value: &str) {
    let label = format!("{}:", label);
    output.push_str(&format!(
        "{:<width$}{}\n",
        label,
        wrap_text(value, LABEL_WIDTH),
        width = LABEL_WIDTH
    ));
}

/// Plain text output formatter.
///
/// Formats records as tab-separated text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_record(&self, view: &RecordView) -> String {
        let mut output = format!("{}\n", view.id);
        for (label, value) in &view.fields {
            if !value.is_empty() {
                output.push_str(&format!("{}\t{}\n", label, value));
            }
        }
        if !view.period_detailed.is_empty() {
            output.push_str(&format!("Period\t{}\n", view.period_detailed));
        }
        output
    }

    fn format_list(&self, section: Section, views: &[RecordView]) -> String {
        if views.is_empty() {
            return format!("No {} records found.", section);
        }

        let mut output = String::new();
        for view in views {
            output.push_str(&format!("{}\t{}\t{}\n", view.id, view.title, view.period));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
