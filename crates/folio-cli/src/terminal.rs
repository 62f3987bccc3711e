// Rust guideline compliant 2026-10-14

//! Terminal UI utilities for the Folio CLI.
//!
//! This module provides color support, terminal width detection,
//! and status-line helpers.

use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disables colored status lines for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Determines if colored output should be used.
///
/// Respects `--no-color`, the NO_COLOR environment variable and terminal
/// capabilities.
pub fn should_use_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) || env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns, or 80 if it cannot be determined.
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// Continuation lines are indented by `indent` spaces.
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_line.chars().count() + 1 + word.chars().count() <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
            }
        }
        result.push_str(&current_line);
    }

    result
}

fn stderr() -> StandardStream {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stderr(choice)
}

/// Prints a status message with a colored prefix to stderr.
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = stderr();
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    print_status("ℹ", Color::Cyan, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_terminal_width_returns_positive() {
        assert!(get_terminal_width() > 0);
    }

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_to_width("short", 0, 80), "short");
    }

    #[test]
    fn test_wrap_long_line_indents_continuations() {
        let wrapped = wrap_to_width("alpha beta gamma delta epsilon", 4, 20);
        assert_eq!(wrapped, "alpha beta gamma\n    delta epsilon");
    }

    #[test]
    fn test_wrap_narrow_terminal_gives_up() {
        assert_eq!(wrap_to_width("alpha beta", 4, 12), "alpha beta");
    }
}
