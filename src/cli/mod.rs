mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run in CLI mode with the given arguments.
pub fn run(args: Vec<String>) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    }
}
