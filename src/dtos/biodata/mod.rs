pub mod create_biodata;
pub mod update_biodata;

/// Coerces a form-encoded age string to the stored integer form.
pub(crate) fn parse_age(value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("age must be an integer, got: {}", value))
}

// Matches the frontend's string encoding: only "true" is true.
pub(crate) fn bool_from_form(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_age_accepts_integer_strings() {
        assert_eq!(parse_age("25").unwrap(), 25);
        assert_eq!(parse_age(" 30 ").unwrap(), 30);
    }

    #[test]
    fn parse_age_rejects_non_integers() {
        assert!(parse_age("").is_err());
        assert!(parse_age("twenty").is_err());
        assert!(parse_age("25.5").is_err());
    }

    #[test]
    fn bool_from_form_only_accepts_true() {
        assert!(bool_from_form("true"));
        assert!(!bool_from_form("false"));
        assert!(!bool_from_form("True"));
        assert!(!bool_from_form(""));
        assert!(!bool_from_form("yes"));
    }
}
