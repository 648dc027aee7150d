//! CLI context: settings, flags, and clipboard state for one run.

use std::fs::OpenOptions;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{prompts, quiet, CliFlags};
use crate::pass::{self, GenerationRequest, Sink};
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit, not an error.
pub struct Done;

pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments into a runnable context.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved && !flags.default {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passpool {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Fold CLI flags into settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.include_uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.include_lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.include_digits = false;
        }
        if self.flags.no_special {
            self.settings.include_special = false;
        }
        if let Some(ref chars) = self.flags.exclude {
            self.settings.exclude_chars = chars.clone();
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = normalize_output_path(path);
            self.settings.output_to_terminal = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    fn generate_output(&mut self) {
        let request = GenerationRequest::from_settings(&self.settings);
        let count = self.settings.number_of_passwords.max(1);

        let result = if self.settings.to_clipboard {
            pass::generate_batch(&request, count, Sink::Clipboard)
        } else if !self.settings.output_file_path.is_empty() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.settings.output_file_path);
            match file {
                Ok(f) => pass::generate_batch(&request, count, Sink::File(f)),
                Err(e) => {
                    prompts::error(&format!(
                        "Cannot open {}: {}",
                        self.settings.output_file_path, e
                    ));
                    std::process::exit(1);
                }
            }
        } else {
            pass::generate_batch(&request, count, Sink::Stdout)
        };

        match result {
            Ok(Some(mut passwords)) => {
                self.copy_to_clipboard(&passwords);
                passwords.zeroize();
            }
            Ok(None) => {
                if !self.settings.output_file_path.is_empty() {
                    let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| self.settings.output_file_path.clone());
                    prompts::passwords_written(count, &full_path);
                }
            }
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    fn copy_to_clipboard(&mut self, passwords: &str) {
        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(passwords.to_string()) {
                Ok(_) => {
                    // Flush the clipboard round-trip copy out of memory
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        }
    }
}

fn normalize_output_path(path: &str) -> String {
    if path == "." {
        "passpool.txt".to_string()
    } else if path.ends_with('/') {
        format!("{}passpool.txt", path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_shape_the_request() {
        let args = vec![
            "passpool".to_string(),
            "-l".to_string(),
            "20".to_string(),
            "--no-special".to_string(),
            "-x".to_string(),
            "abc".to_string(),
        ];
        let mut ctx = Context::new(args).unwrap();
        ctx.apply_flags();
        let request = GenerationRequest::from_settings(&ctx.settings);
        assert_eq!(request.length, 20);
        assert!(!request.include_special);
        assert!(request.include_uppercase);
        assert_eq!(request.exclude_chars, b"abc");
    }

    #[test]
    fn output_path_normalization() {
        assert_eq!(normalize_output_path("."), "passpool.txt");
        assert_eq!(normalize_output_path("dir/"), "dir/passpool.txt");
        assert_eq!(normalize_output_path("list.txt"), "list.txt");
    }
}
