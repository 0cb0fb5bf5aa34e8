//! Process-wide quiet switch for banners, warnings and prompts.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prompts need someone at stdin to answer them.
pub fn skip_prompt() -> bool {
    enabled() || unsafe { libc::isatty(0) != 1 }
}
