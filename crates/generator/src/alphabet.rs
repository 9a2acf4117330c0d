//! Characters the generator can send

use crate::backend::BackendError;

const PUNCTUATION: &str = "\"'$()+,-./:;=?@_!&";

/// Whether `c` has a Morse representation. Letters match in either case.
pub fn is_representable(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || PUNCTUATION.contains(c)
}

/// Check every character of `text`, reporting the first one that cannot be sent.
pub fn validate(text: &str) -> Result<(), BackendError> {
    match text.char_indices().find(|(_, c)| !is_representable(*c)) {
        Some((position, c)) => Err(BackendError::invalid_input(format!(
            "character {c:?} at byte {position} has no Morse representation"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('a')]
    #[case('Z')]
    #[case('7')]
    #[case(' ')]
    #[case('?')]
    #[case('@')]
    fn test_representable(#[case] c: char) {
        assert!(is_representable(c));
    }

    #[rstest]
    #[case('#')]
    #[case('%')]
    #[case('\n')]
    #[case('é')]
    fn test_not_representable(#[case] c: char) {
        assert!(!is_representable(c));
    }

    #[test]
    fn test_validate_reports_first_invalid_character() {
        let err = validate("cq #1 %").unwrap_err();
        assert!(err.message().contains("'#'"));
        assert!(err.message().contains("byte 3"));
    }

    #[test]
    fn test_validate_accepts_empty_text() {
        assert!(validate("").is_ok());
    }
}
