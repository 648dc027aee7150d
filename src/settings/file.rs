//! Settings file persistence.
//!
//! One comma-separated line at `$HOME/.config/passpool/settings`. Free-text
//! fields (the exclusion set, the output path) escape `,` and `|` with a
//! leading `|`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELD_COUNT: usize = 10;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(encode(settings).as_bytes())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        save(settings)?;
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(line.trim_end(), settings) {
        // Stale or corrupt line: rewrite with current defaults.
        save(settings)?;
    }

    Ok(())
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.include_uppercase,
        settings.include_lowercase,
        settings.include_digits,
        settings.include_special,
        escape(&settings.exclude_chars),
        escape(&settings.output_file_path),
        settings.output_to_terminal,
        settings.to_clipboard,
    )
}

/// Parse one settings line. Returns false when the line does not carry the
/// expected field count; individual unparsable fields keep their current
/// value.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELD_COUNT {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.include_uppercase = parts[2].parse().unwrap_or(settings.include_uppercase);
    settings.include_lowercase = parts[3].parse().unwrap_or(settings.include_lowercase);
    settings.include_digits = parts[4].parse().unwrap_or(settings.include_digits);
    settings.include_special = parts[5].parse().unwrap_or(settings.include_special);
    settings.exclude_chars = parts[6].clone();
    settings.output_file_path = parts[7].clone();
    settings.output_to_terminal = parts[8].parse().unwrap_or(settings.output_to_terminal);
    settings.to_clipboard = parts[9].parse().unwrap_or(settings.to_clipboard);
    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passpool/settings", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips_defaults() {
        let original = Settings::default();
        let mut decoded = Settings {
            pass_length: 99,
            ..Settings::default()
        };
        assert!(decode(encode(&original).trim_end(), &mut decoded));
        assert_eq!(decoded, original);
    }

    #[test]
    fn exclusion_set_survives_delimiter_characters() {
        let original = Settings {
            exclude_chars: "a,b|c".to_string(),
            output_file_path: "out,dir/pass.txt".to_string(),
            ..Settings::default()
        };
        let mut decoded = Settings::default();
        assert!(decode(encode(&original).trim_end(), &mut decoded));
        assert_eq!(decoded.exclude_chars, "a,b|c");
        assert_eq!(decoded.output_file_path, "out,dir/pass.txt");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut settings = Settings::default();
        assert!(!decode("12,1,true", &mut settings));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unparsable_fields_keep_current_values() {
        let mut settings = Settings::default();
        assert!(decode(
            "oops,2,true,true,true,true,,,true,false",
            &mut settings
        ));
        assert_eq!(settings.pass_length, 12);
        assert_eq!(settings.number_of_passwords, 2);
    }

    #[test]
    fn split_escaped_keeps_empty_fields() {
        let parts = split_escaped("a,,b", ',');
        assert_eq!(parts, vec!["a", "", "b"]);
    }
}
