//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red), never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Clipboard confirmation, suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Returns true to fall back to terminal output, false to abort. Quiet or
/// non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Output summary after writing to a file, suppressed in quiet mode.
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
