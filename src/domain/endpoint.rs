//! Save endpoint value rules

/// Settings key holding the save endpoint
pub const BACKEND_ENDPOINT_KEY: &str = "backend_endpoint";

/// Endpoint used when nothing usable is stored
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/save";

/// Resolve a stored endpoint value.
///
/// Absent, empty and whitespace-only values fall back to [`DEFAULT_ENDPOINT`].
/// Anything else is returned verbatim.
pub fn resolve_stored(stored: Option<&str>) -> String {
    match stored {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

/// Normalize a user-edited endpoint before it is persisted.
///
/// The value is trimmed; an empty result becomes [`DEFAULT_ENDPOINT`].
/// No URL validation is done here.
pub fn normalize_input(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_ENDPOINT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_uses_default() {
        assert_eq!(resolve_stored(None), DEFAULT_ENDPOINT);
    }

    #[test]
    fn empty_and_blank_values_use_default() {
        assert_eq!(resolve_stored(Some("")), DEFAULT_ENDPOINT);
        assert_eq!(resolve_stored(Some("   ")), DEFAULT_ENDPOINT);
        assert_eq!(resolve_stored(Some("\t\n")), DEFAULT_ENDPOINT);
    }

    #[test]
    fn stored_value_is_returned_verbatim() {
        assert_eq!(
            resolve_stored(Some("https://example.com/save")),
            "https://example.com/save"
        );
        // Non-empty values are not trimmed on read
        assert_eq!(resolve_stored(Some(" http://x/ ")), " http://x/ ");
    }

    #[test]
    fn normalize_input_trims() {
        assert_eq!(
            normalize_input("  https://example.com/save \n"),
            "https://example.com/save"
        );
    }

    #[test]
    fn normalize_input_blank_falls_back() {
        assert_eq!(normalize_input(""), DEFAULT_ENDPOINT);
        assert_eq!(normalize_input("    "), DEFAULT_ENDPOINT);
    }

    #[test]
    fn normalize_input_does_not_validate() {
        assert_eq!(normalize_input("not a url"), "not a url");
    }
}
