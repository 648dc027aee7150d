//! Raw-mode line editing for menu input.

use crossterm::event::{read, Event, KeyCode, KeyModifiers};

use crate::terminal::{flush, reset_terminal, RawModeGuard};

/// Edit a single ASCII line in raw mode.
///
/// Enter accepts, Esc/Ctrl+Q cancels (returns `None`), Ctrl+U clears,
/// Ctrl+C exits the process after restoring the terminal.
pub fn line_edit(prompt: &str, initial: &str) -> Option<String> {
    let mut input: String = initial.chars().filter(|c| c.is_ascii()).collect();
    let mut cursor = input.len();
    let mut cancelled = false;
    let mut last_len = input.len();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input),
    };

    print!("{}: {}", prompt, input);
    flush();

    loop {
        let event = match read() {
            Ok(ev) => ev,
            Err(_) => break,
        };
        let key = match event {
            Event::Key(k) => k,
            _ => continue,
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors; restore the terminal first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    input.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < input.len() {
                    input.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => {
                if cursor < input.len() {
                    cursor += 1;
                }
            }
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        // Redraw line and reposition the cursor
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, input);
        print!("\x1b[{}G", prompt.len() + 3 + cursor);
        flush();
        last_len = input.len();
    }

    drop(guard);
    println!();
    if cancelled {
        None
    } else {
        Some(input)
    }
}

/// Edit a number, clamped to `[min, max]`. Re-prompts on non-numeric input.
pub fn numeric_edit(prompt: &str, initial: usize, min: usize, max: usize) -> Option<usize> {
    let mut current = initial.to_string();
    loop {
        let entered = line_edit(prompt, &current)?;
        let digits: String = entered.chars().filter(|c| c.is_ascii_digit()).collect();
        match digits.parse::<usize>() {
            Ok(n) => return Some(n.clamp(min, max)),
            Err(_) => current.clear(),
        }
    }
}
