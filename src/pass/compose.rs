//! Password composition: independent uniform draws from the pool.

use std::fmt;

use crate::rand::{EntropyRng, IndexSource};

use super::pool;
use super::request::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// Every enabled class was disabled or excluded away.
    EmptyPool,
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::EmptyPool => write!(
                f,
                "no characters available to generate a password; enable a class or relax exclusions"
            ),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Compose a password using the hardware entropy source.
pub fn compose(request: &GenerationRequest) -> Result<String, ComposeError> {
    compose_with(request, &mut EntropyRng)
}

/// Compose a password, drawing each character independently and uniformly
/// (with replacement) from the request's pool via `rng`.
///
/// There is deliberately no guarantee that every enabled class appears in
/// the output; forcing coverage would skew the distribution. A `length`
/// of zero yields the empty password.
pub fn compose_with(
    request: &GenerationRequest,
    rng: &mut dyn IndexSource,
) -> Result<String, ComposeError> {
    let pool = pool::build(request);
    if pool.is_empty() {
        return Err(ComposeError::EmptyPool);
    }

    let bytes: Vec<u8> = (0..request.length)
        .map(|_| pool[rng.next_index(pool.len())])
        .collect();

    // Safety: class alphabets are all ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SeqSource;

    #[test]
    fn output_length_matches_request() {
        let request = GenerationRequest {
            length: 12,
            ..GenerationRequest::default()
        };
        let pass = compose(&request).unwrap();
        assert_eq!(pass.len(), 12);
    }

    #[test]
    fn every_character_comes_from_the_pool() {
        let request = GenerationRequest {
            length: 256,
            exclude_chars: b"O0l1".to_vec(),
            ..GenerationRequest::default()
        };
        let pool = pool::build(&request);
        let pass = compose(&request).unwrap();
        for b in pass.bytes() {
            assert!(pool.contains(&b));
        }
    }

    #[test]
    fn digits_only_with_zero_excluded() {
        let request = GenerationRequest {
            length: 8,
            include_uppercase: false,
            include_lowercase: false,
            include_special: false,
            exclude_chars: vec![b'0'],
            ..GenerationRequest::default()
        };
        let pass = compose(&request).unwrap();
        assert_eq!(pass.len(), 8);
        assert!(!pass.contains('0'));
        assert!(pass.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn all_classes_disabled_fails() {
        let request = GenerationRequest {
            length: 10,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            ..GenerationRequest::default()
        };
        assert_eq!(compose(&request), Err(ComposeError::EmptyPool));
    }

    #[test]
    fn fully_excluded_single_class_fails() {
        let request = GenerationRequest {
            length: 5,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            exclude_chars: pool::UPPERCASE.to_vec(),
            ..GenerationRequest::default()
        };
        assert_eq!(compose(&request), Err(ComposeError::EmptyPool));
    }

    #[test]
    fn zero_length_yields_empty_password() {
        let request = GenerationRequest {
            length: 0,
            ..GenerationRequest::default()
        };
        assert_eq!(compose(&request).unwrap(), "");
    }

    #[test]
    fn deterministic_source_gives_exact_output() {
        // Pool is A-Z only; indexes map straight onto the alphabet.
        let request = GenerationRequest {
            length: 5,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            ..GenerationRequest::default()
        };
        let mut src = SeqSource::new(vec![7, 4, 11, 11, 14]);
        assert_eq!(compose_with(&request, &mut src).unwrap(), "HELLO");
    }

    #[test]
    fn repeats_are_allowed() {
        let request = GenerationRequest {
            length: 4,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            ..GenerationRequest::default()
        };
        let mut src = SeqSource::new(vec![0]);
        assert_eq!(compose_with(&request, &mut src).unwrap(), "AAAA");
    }
}
