mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;
mod text;

pub use context::{CliError, Context};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run the CLI, returning the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    match Context::new(&args).and_then(|mut ctx| ctx.run()) {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
