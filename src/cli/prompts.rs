//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use passmask::terminal::{print_error, print_warning};

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        print_warning(msg);
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    print_error(msg);
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: u64) {
    if !quiet::enabled() {
        println!("*** {count} MASK(S) COPIED TO CLIPBOARD ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to
/// printing masks on the terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print masks to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print mask file summary - suppressed in quiet mode
pub fn masks_written(count: u64, path: &str) {
    if !quiet::enabled() {
        println!("{count} mask(s) \u{2192} {path}");
    }
}

/// Print settings saved confirmation - suppressed in quiet mode
pub fn defaults_saved(path: &str) {
    if !quiet::enabled() {
        println!("Defaults saved \u{2192} {path}");
    }
}
