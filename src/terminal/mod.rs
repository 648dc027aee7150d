//! Shared terminal utilities: box drawing, raw mode, ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
