//! Character pool construction.
//!
//! The pool is the ordered concatenation of the enabled class alphabets
//! (uppercase, lowercase, digits, special) with every excluded character
//! removed. It is rebuilt from scratch for every request.

use super::request::GenerationRequest;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()";

/// Build the eligible pool for a request.
///
/// Exclusion only filters the union of enabled classes; excluding a
/// character no enabled class contains is a no-op. Relative order of the
/// remaining characters is preserved.
pub fn build(request: &GenerationRequest) -> Vec<u8> {
    let mut pool =
        Vec::with_capacity(UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SPECIAL.len());

    if request.include_uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if request.include_lowercase {
        pool.extend_from_slice(LOWERCASE);
    }
    if request.include_digits {
        pool.extend_from_slice(DIGITS);
    }
    if request.include_special {
        pool.extend_from_slice(SPECIAL);
    }

    if !request.exclude_chars.is_empty() {
        pool.retain(|c| !request.exclude_chars.contains(c));
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes() -> GenerationRequest {
        GenerationRequest::default()
    }

    #[test]
    fn full_pool_has_seventy_two_characters() {
        assert_eq!(build(&all_classes()).len(), 26 + 26 + 10 + 10);
    }

    #[test]
    fn classes_concatenate_in_fixed_order() {
        let pool = build(&all_classes());
        assert_eq!(&pool[..26], UPPERCASE);
        assert_eq!(&pool[26..52], LOWERCASE);
        assert_eq!(&pool[52..62], DIGITS);
        assert_eq!(&pool[62..], SPECIAL);
    }

    #[test]
    fn disabled_classes_are_absent() {
        let request = GenerationRequest {
            include_uppercase: false,
            include_lowercase: false,
            include_special: false,
            ..all_classes()
        };
        assert_eq!(build(&request), DIGITS);
    }

    #[test]
    fn exclusion_removes_preserving_order() {
        let request = GenerationRequest {
            include_uppercase: false,
            include_lowercase: false,
            include_special: false,
            exclude_chars: vec![b'0'],
            ..all_classes()
        };
        assert_eq!(build(&request), b"123456789");
    }

    #[test]
    fn excluded_characters_never_survive() {
        let request = GenerationRequest {
            exclude_chars: b"aA0!z9".to_vec(),
            ..all_classes()
        };
        let pool = build(&request);
        for c in b"aA0!z9" {
            assert!(!pool.contains(c));
        }
        assert_eq!(pool.len(), 72 - 6);
    }

    #[test]
    fn excluding_foreign_characters_is_a_noop() {
        let request = GenerationRequest {
            include_special: false,
            exclude_chars: b"!@#".to_vec(), // special class disabled
            ..all_classes()
        };
        assert_eq!(build(&request).len(), 26 + 26 + 10);
    }

    #[test]
    fn pool_construction_is_deterministic() {
        let request = GenerationRequest {
            exclude_chars: b"ilLI10O".to_vec(),
            ..all_classes()
        };
        assert_eq!(build(&request), build(&request));
    }

    #[test]
    fn fully_excluded_class_yields_empty_pool() {
        let request = GenerationRequest {
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            exclude_chars: UPPERCASE.to_vec(),
            ..all_classes()
        };
        assert!(build(&request).is_empty());
    }
}
