use std::env;
use std::process;

mod cli;
mod exits;
mod settings;
mod terminal;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    process::exit(cli::run(args));
}
