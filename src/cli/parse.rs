use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => {
                flags.length = Some(numeric_value(args, &mut i)?);
            }
            "-n" | "--number" => {
                flags.number = Some(numeric_value(args, &mut i)?);
            }
            "-x" | "--exclude" => {
                i += 1;
                match args.get(i) {
                    Some(chars) => flags.exclude = Some(chars.clone()),
                    None => return Err(ParseError::MissingValue(args[i - 1].clone())),
                }
            }
            "-o" | "--output" => {
                // Optional path; bare -o falls back to the default file name
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    *i += 1;
    match args.get(*i) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ParseError::InvalidNumber(raw.clone())),
        None => Err(ParseError::MissingValue(args[*i - 1].clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        std::iter::once("passpool")
            .chain(s.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "16", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn parses_class_toggles_and_exclude() {
        let flags = parse(&args(&["--no-special", "--no-upper", "-x", "O0l1"])).unwrap();
        assert!(flags.no_special);
        assert!(flags.no_upper);
        assert!(!flags.no_lower);
        assert_eq!(flags.exclude.as_deref(), Some("O0l1"));
    }

    #[test]
    fn bare_output_flag_uses_default_path() {
        let flags = parse(&args(&["-o"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
    }

    #[test]
    fn rejects_unknown_argument() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric_length() {
        assert_eq!(
            parse(&args(&["-l", "many"])),
            Err(ParseError::InvalidNumber("many".to_string()))
        );
    }

    #[test]
    fn rejects_trailing_value_flag() {
        assert_eq!(
            parse(&args(&["-x"])),
            Err(ParseError::MissingValue("-x".to_string()))
        );
    }
}
