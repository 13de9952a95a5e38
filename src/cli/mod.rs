//! Non-interactive mode driven by command-line flags.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::error::Error;

/// Run CLI mode and return the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => 0,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

fn report(err: &Error) {
    match err {
        Error::Validation(v) => prompts::error(&format!("{}: {}", v.title(), v)),
        Error::Args(_) => {
            prompts::error(&err.to_string());
            prompts::error("Run with --help for usage.");
        }
        _ => prompts::error(&err.to_string()),
    }
}
