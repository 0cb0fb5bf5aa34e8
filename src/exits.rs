//! Exit handling: signal handlers, cooperative cancellation, terminal cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Raised by the first SIGINT/SIGTERM/SIGHUP; engines poll it between masks.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Flag handed to the engines as their stop signal.
pub fn interrupt_flag() -> &'static AtomicBool {
    &INTERRUPTED
}

pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, b"\x1b[0m".as_ptr() as *const libc::c_void, 4);
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP.
///
/// The first signal asks the running engine to stop so a partial summary can
/// be printed; a second one exits immediately. Only async-signal-safe calls
/// are made here.
extern "C" fn signal_handler(_: libc::c_int) {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        unsafe { libc::_exit(130) }
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
    }
}
