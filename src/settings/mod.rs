//! Generation settings and their persistence.

mod file;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub exclude_chars: String,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            exclude_chars: String::new(),
            output_file_path: String::new(),
            output_to_terminal: true,
            to_clipboard: false,
        }
    }
}
