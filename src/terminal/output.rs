//! Terminal output: box drawing, ANSI helpers, entropy display.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

pub const BOX_WIDTH: usize = 74;

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_notice(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Box top with optional title: ┌─ Title ─────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let lead = format!("─ {} ", title);
        let rest = BOX_WIDTH - 2 - lead.chars().count();
        println!("┌{}{}┐", lead, "─".repeat(rest));
    }
}

/// Box content line, left-aligned: │ content     │
pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = console_width(content);
    if width <= inner {
        println!("│ {}{} │", content, " ".repeat(inner - width));
    } else {
        println!("│ {} │", content);
    }
}

/// Box content line, centered.
pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = console_width(content);
    if width <= inner {
        let left = (inner - width) / 2;
        let right = inner - width - left;
        println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(right));
    } else {
        println!("│ {} │", content);
    }
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Horizontal rule inside a box.
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Flag/description row for the help screen, fixed two-column layout.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 27;
    let inner = BOX_WIDTH - 4;
    let padded = if flag.len() < FLAG_COL {
        format!("{}{}", flag, " ".repeat(FLAG_COL - flag.len()))
    } else {
        flag[..FLAG_COL].to_string()
    };
    let desc_col = inner - FLAG_COL;
    let trimmed: String = desc.chars().take(desc_col).collect();
    println!(
        "│ {}{}{} │",
        padded,
        trimmed,
        " ".repeat(desc_col.saturating_sub(trimmed.chars().count()))
    );
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Password entropy in bits: length * log2(pool size).
pub fn calculate_entropy(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_empty_pool_is_zero() {
        assert_eq!(calculate_entropy(12, 0), 0.0);
    }

    #[test]
    fn full_pool_twelve_chars_is_strong() {
        let bits = calculate_entropy(12, 72);
        assert!(bits > 74.0 && bits < 75.0);
        assert_eq!(entropy_strength(bits), "Strong");
    }

    #[test]
    fn strength_bands() {
        assert_eq!(entropy_strength(10.0), "Weak");
        assert_eq!(entropy_strength(40.0), "Fair");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }
}
