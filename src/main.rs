use std::env;

mod cli;
mod exits;
mod settings;

fn main() {
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
