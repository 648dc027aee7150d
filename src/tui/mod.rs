//! Interactive menu mode.
//!
//! Terminal rendition of the classic generator form: class toggles, a
//! length field bounded 4-64, an exclusion entry, masked display of the
//! result with show/hide, and clipboard copy.

mod input;
mod menus;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::pass::{compose, GenerationRequest};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, print_notice, reset_terminal};

pub use input::{line_edit, numeric_edit};
pub use menus::print_help;

// The length field is a UI affordance; the composer itself is unbounded.
const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 64;

enum Status {
    Notice(String),
    Error(String),
}

/// Run the interactive menu loop.
pub fn run() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Error loading settings: {}", e));
            Settings::default()
        }
    };

    let mut password: Option<String> = None;
    let mut visible = false;
    let mut status: Option<Status> = None;

    loop {
        menus::print_main_screen(&settings, password.as_deref(), visible);
        match status.take() {
            Some(Status::Notice(msg)) => print_notice(&msg),
            Some(Status::Error(msg)) => print_error(&msg),
            None => println!(),
        }

        let choice = match line_edit("Enter option", "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        clear();
        match choice.trim() {
            "" | "g" => {
                generate(&settings, &mut password, &mut visible, &mut status);
            }
            "1" => {
                if let Some(len) =
                    numeric_edit("Password length (4-64)", settings.pass_length, MIN_LENGTH, MAX_LENGTH)
                {
                    settings.pass_length = len;
                }
                clear();
            }
            "2" => settings.include_uppercase = !settings.include_uppercase,
            "3" => settings.include_lowercase = !settings.include_lowercase,
            "4" => settings.include_digits = !settings.include_digits,
            "5" => settings.include_special = !settings.include_special,
            "6" => {
                if let Some(chars) = line_edit("Exclude characters", &settings.exclude_chars) {
                    settings.exclude_chars = chars;
                }
                clear();
            }
            "7" => {
                if let Some(n) =
                    numeric_edit("Number of passwords", settings.number_of_passwords, 1, 10_000)
                {
                    settings.number_of_passwords = n;
                }
                clear();
            }
            "s" => match password {
                Some(_) => visible = !visible,
                None => {
                    status = Some(Status::Error(
                        "No password to show. Generate one first.".to_string(),
                    ))
                }
            },
            "c" => copy_to_clipboard(password.as_deref(), &mut status),
            "w" => {
                status = Some(match settings.save_to_file() {
                    Ok(_) => Status::Notice("Settings saved.".to_string()),
                    Err(e) => Status::Error(format!("Failed to save settings: {}", e)),
                });
            }
            "r" => {
                settings = Settings::default();
                status = Some(Status::Notice("Defaults loaded.".to_string()));
            }
            "h" => {
                menus::print_help();
                let _ = line_edit("Press Enter to return", "");
                clear();
            }
            "q" => break,
            _ => status = Some(Status::Error("Invalid option.".to_string())),
        }
    }

    if let Some(mut p) = password.take() {
        p.zeroize();
    }
    clear();
}

fn generate(
    settings: &Settings,
    password: &mut Option<String>,
    visible: &mut bool,
    status: &mut Option<Status>,
) {
    let request = GenerationRequest::from_settings(settings);
    match compose(&request) {
        Ok(new_pass) => {
            if let Some(mut old) = password.replace(new_pass) {
                old.zeroize();
            }
            // Fresh passwords start masked
            *visible = false;
        }
        Err(e) => *status = Some(Status::Error(e.to_string())),
    }
}

fn copy_to_clipboard(password: Option<&str>, status: &mut Option<Status>) {
    let pass = match password {
        Some(p) => p,
        None => {
            *status = Some(Status::Error(
                "No password to copy. Generate one first.".to_string(),
            ));
            return;
        }
    };

    let mut ctx = match ClipboardContext::new() {
        Ok(c) => c,
        Err(e) => {
            *status = Some(Status::Error(format!("Clipboard unavailable: {}", e)));
            return;
        }
    };

    match ctx.set_contents(pass.to_string()) {
        Ok(_) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            *status = Some(Status::Notice("Password copied to clipboard!".to_string()));
        }
        Err(e) => *status = Some(Status::Error(format!("Clipboard error: {}", e))),
    }
}
