//! Command-line front end.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;
mod report;

use tracing_subscriber::EnvFilter;

pub use context::Context;
pub use flags::{CliFlags, CommandMode};
pub use parse::parse;

use crate::exits;

/// Install the stderr log subscriber. `RUST_LOG` wins over the default.
fn init_tracing(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run CLI and return the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run `passmask --help` for usage.");
            return 1;
        }
    };
    init_tracing(ctx.flags.quiet);

    if let Err(e) = ctx.run() {
        prompts::error(&e.to_string());
        return 1;
    }
    if exits::interrupted() { 130 } else { 0 }
}
