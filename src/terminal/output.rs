//! Terminal output utilities.
//!
//! Box drawing, number formatting, duration rendering.

use std::io;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::config::ONE_YEAR_SECS;

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red on stderr.
pub fn print_error(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Print warning message in yellow on stderr.
pub fn print_warning(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: u128) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Render whole seconds as `H:MM:SS`, prefixed by `N day(s), ` when needed.
pub fn format_duration(seconds: u128) -> String {
    let days = seconds / 86_400;
    let rem = seconds % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3_600, rem % 3_600 / 60, rem % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

/// Duration, or `>1 year` once past the one-year threshold.
pub fn format_runtime(seconds: u128) -> String {
    if seconds > ONE_YEAR_SECS {
        ">1 year".to_string()
    } else {
        format_duration(seconds)
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;
const LABEL_COL: usize = 18;
const FLAG_COL: usize = 27;

/// Row padded on both sides so `content` starts `left` columns in.
fn row(left: usize, content: &str) -> String {
    let right = INNER_WIDTH.saturating_sub(left + console_width(content));
    format!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(right))
}

/// ┌─ Title ──────┐, or a plain rule when `title` is empty.
pub fn box_top(title: &str) {
    let label = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let rule = BOX_WIDTH.saturating_sub(2 + label.chars().count());
    println!("┌{label}{}┐", "─".repeat(rule));
}

pub fn box_line(content: &str) {
    println!("{}", row(0, content));
}

pub fn box_line_center(content: &str) {
    let left = INNER_WIDTH.saturating_sub(console_width(content)) / 2;
    println!("{}", row(left, content));
}

/// `label:` padded to a fixed column, then the value.
pub fn box_field(label: &str, value: &str) {
    box_line(&format!("{:<LABEL_COL$}{value}", format!("{label}:")));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help option row; long descriptions wrap under the description column.
pub fn box_opt(flag: &str, desc: &str) {
    let lines = wrap(desc, INNER_WIDTH - FLAG_COL);
    let first = lines.first().map(String::as_str).unwrap_or("");
    let flag: String = flag.chars().take(FLAG_COL).collect();
    box_line(&format!("{flag:<FLAG_COL$}{first}"));
    for line in lines.iter().skip(1) {
        println!("{}", row(FLAG_COL, line));
    }
}

/// Greedy word wrap to `width` columns.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines
}

/// Display width, ignoring ANSI color sequences.
fn console_width(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match (in_escape, c) {
            (_, '\x1b') => {
                in_escape = true;
                false
            }
            (true, 'm') => {
                in_escape = false;
                false
            }
            (escaping, _) => !escaping,
        })
        .count()
}
