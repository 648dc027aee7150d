//! Screen rendering for the interactive menu.

use crate::pass::{pool, GenerationRequest};
use crate::rand;
use crate::settings::Settings;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy, entropy_strength,
    print_rule, RESET, UNDERLINE,
};

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Draw the main screen: current request state, pool summary, key bindings,
/// and the (masked or visible) last password.
pub fn print_main_screen(settings: &Settings, password: Option<&str>, visible: bool) {
    let request = GenerationRequest::from_settings(settings);
    let pool = pool::build(&request);
    let bits = calculate_entropy(settings.pass_length, pool.len());

    box_top("Passpool");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Request{RESET}:"));
    box_line(&format!("  1) Password Length: {}", settings.pass_length));
    box_line(&format!(
        "  2) Uppercase (A-Z): {}",
        on_off(settings.include_uppercase)
    ));
    box_line(&format!(
        "  3) Lowercase (a-z): {}",
        on_off(settings.include_lowercase)
    ));
    box_line(&format!(
        "  4) Digits (0-9): {}",
        on_off(settings.include_digits)
    ));
    box_line(&format!(
        "  5) Special (!@#$%^&*()): {}",
        on_off(settings.include_special)
    ));
    box_line(&format!(
        "  6) Exclude Characters: {}",
        settings.exclude_chars
    ));
    box_line(&format!(
        "  7) Number of Passwords: {}",
        settings.number_of_passwords
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Pool{RESET}:"));
    if pool.is_empty() {
        box_line("  0 characters (nothing to draw from)");
    } else {
        box_line(&format!(
            "  {} characters \u{2022} {:.1} bits ({})",
            pool.len(),
            bits,
            entropy_strength(bits)
        ));
    }
    box_line(&format!("  Entropy source: {}", rand::entropy_source()));

    box_line("");
    print_rule();
    box_line("  Enter/g) generate  |  s) show/hide  |  c) copy to clipboard");
    box_line("  w) save settings   |  r) defaults   |  h) help  |  q) quit");
    box_bottom();

    match password {
        Some(p) if visible => box_password(p),
        Some(p) => box_password(&"*".repeat(p.len())),
        None => println!(),
    }
}

fn box_password(display: &str) {
    println!();
    box_top("Password");
    box_line_center(display);
    box_bottom();
}

/// Help screen, shared by the TUI and `--help`.
pub fn print_help() {
    box_top("Passpool");
    box_line_center("Pool-based password generator");
    box_line("");
    box_line("Builds a character pool from the enabled classes (uppercase,");
    box_line("lowercase, digits, special), removes excluded characters, and");
    box_line("draws each position uniformly at random.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open the menu.");
    box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to generate directly.");
    box_line("");
    box_line("USAGE:");
    box_line("  passpool [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Request:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("  -x, --exclude <CHARS>", "Characters to remove from the pool");
    box_opt("      --no-upper", "Disable uppercase letters");
    box_opt("      --no-lower", "Disable lowercase letters");
    box_opt("      --no-digits", "Disable digits");
    box_opt("      --no-special", "Disable special characters");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Write to file (default: passpool.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved settings from the config file");
    box_opt("  -d, --default", "Use default settings");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passpool -l 16               One password, 16 characters");
    box_line("  passpool -l 20 -n 3          Three passwords, 20 characters");
    box_line("  passpool --no-special -x O0  Alphanumeric, no O or 0");
    box_line("  passpool -l 24 -b            24 characters to the clipboard");
    box_line("");
    box_bottom();
    println!();
}
