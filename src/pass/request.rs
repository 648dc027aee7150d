//! The immutable per-invocation generation request.

use crate::settings::Settings;

/// Everything a single generation needs, captured at invocation time.
///
/// Callers (CLI, TUI) build one of these from their current state; the
/// composer never reads settings or UI state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub exclude_chars: Vec<u8>,
}

impl GenerationRequest {
    pub fn from_settings(settings: &Settings) -> Self {
        GenerationRequest {
            length: settings.pass_length,
            include_uppercase: settings.include_uppercase,
            include_lowercase: settings.include_lowercase,
            include_digits: settings.include_digits,
            include_special: settings.include_special,
            exclude_chars: settings.exclude_chars.bytes().collect(),
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            exclude_chars: Vec::new(),
        }
    }
}
