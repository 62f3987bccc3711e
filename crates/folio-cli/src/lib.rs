// Rust guideline compliant 2026-10-14

//! Folio CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod git;
pub mod logging;
pub mod output;
pub mod render;
pub mod terminal;

pub use git::{last_commit, CommitInfo};
pub use output::{create_formatter, OutputFormatter, RecordView};
pub use render::render_page;
pub use terminal::{get_terminal_width, should_use_color, wrap_text};
