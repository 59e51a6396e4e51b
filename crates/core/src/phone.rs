//! Phone number canonicalization.
//!
//! Phones are stored and compared in a single canonical form so that the
//! client dedup checks cannot be bypassed by formatting ("11 5555-0001" vs
//! "1155550001"). The rules are deliberately dumb: this is a storage
//! format, not a dialing validator.

/// Maximum length of a stored phone, including a leading `+`.
pub const MAX_PHONE_LEN: usize = 15;

/// Canonicalize a raw phone string.
///
/// If the trimmed input starts with `+`, the `+` is kept and spaces,
/// dashes, parentheses and dots are stripped from the remainder. Otherwise
/// every non-digit character is dropped. The result is truncated to
/// [`MAX_PHONE_LEN`] characters.
///
/// Never fails; an empty input yields an empty string. Idempotent:
/// normalizing an already-normalized value is a no-op.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();

    let canonical: String = if let Some(rest) = trimmed.strip_prefix('+') {
        std::iter::once('+')
            .chain(
                rest.chars()
                    .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.')),
            )
            .collect()
    } else {
        trimmed.chars().filter(|c| c.is_ascii_digit()).collect()
    };

    canonical.chars().take(MAX_PHONE_LEN).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_from_local_number() {
        assert_eq!(normalize_phone("(011) 4555-0001"), "01145550001");
    }

    #[test]
    fn keeps_leading_plus() {
        assert_eq!(normalize_phone("+54 9 11 5555-0001"), "+5491155550001");
    }

    #[test]
    fn strips_dots_after_plus() {
        assert_eq!(normalize_phone("+54.11.5555.0001"), "+541155550001");
    }

    #[test]
    fn drops_letters_in_local_form() {
        assert_eq!(normalize_phone("11x5555y0001"), "1155550001");
    }

    #[test]
    fn truncates_to_max_len() {
        let long = "1".repeat(30);
        assert_eq!(normalize_phone(&long).len(), MAX_PHONE_LEN);
    }

    #[test]
    fn truncates_plus_form_to_max_len() {
        let out = normalize_phone("+123456789012345678");
        assert_eq!(out.len(), MAX_PHONE_LEN);
        assert!(out.starts_with('+'));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["+54 9 11 5555-0001", "(011) 4555-0001", "", "+  "] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once, "not idempotent for {raw:?}");
        }
    }
}
