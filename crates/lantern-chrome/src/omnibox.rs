//! Address-entry text resolution.

use lantern_common::AddressError;
use url::Url;

/// Resolve user-typed address text into a loadable URL.
///
/// Text with an explicit `http`/`https` scheme is parsed as-is. Bare
/// domain-looking text (contains a dot, no whitespace, no scheme of
/// its own) gets `https://` prepended. Everything else is rejected
/// with a recoverable [`AddressError`].
pub fn resolve_input(text: &str) -> Result<Url, AddressError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AddressError::Empty);
    }

    if has_web_scheme(text) {
        return Url::parse(text).map_err(|source| AddressError::Parse {
            input: text.to_string(),
            source,
        });
    }

    if looks_like_host(text) {
        let candidate = format!("https://{text}");
        return Url::parse(&candidate).map_err(|source| AddressError::Parse {
            input: text.to_string(),
            source,
        });
    }

    Err(AddressError::Unloadable(text.to_string()))
}

fn has_web_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Heuristic for "the user meant a website": at least one dot, no
/// whitespace, and no scheme of its own.
fn looks_like_host(text: &str) -> bool {
    text.contains('.') && !text.contains(char::is_whitespace) && !text.contains("://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_schemes_are_kept() {
        let url = resolve_input("https://example.com/a?q=1").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?q=1");

        // http is not upgraded; the user asked for it.
        let url = resolve_input("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn scheme_matching_is_case_insensitive() {
        let url = resolve_input("HTTP://EXAMPLE.COM").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn bare_domains_get_https() {
        let url = resolve_input("www.wikipedia.org").unwrap();
        assert_eq!(url.as_str(), "https://www.wikipedia.org/");

        let url = resolve_input("rust-lang.org/learn").unwrap();
        assert_eq!(url.as_str(), "https://rust-lang.org/learn");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let url = resolve_input("  example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(resolve_input(""), Err(AddressError::Empty)));
        assert!(matches!(resolve_input("   "), Err(AddressError::Empty)));
    }

    #[test]
    fn plain_words_are_rejected() {
        assert!(matches!(
            resolve_input("hello"),
            Err(AddressError::Unloadable(_))
        ));
        assert!(matches!(
            resolve_input("hello world"),
            Err(AddressError::Unloadable(_))
        ));
    }

    #[test]
    fn dotted_text_with_spaces_is_rejected() {
        assert!(matches!(
            resolve_input("what. is this"),
            Err(AddressError::Unloadable(_))
        ));
    }

    #[test]
    fn foreign_schemes_are_rejected() {
        assert!(matches!(
            resolve_input("ftp://files.example.com"),
            Err(AddressError::Unloadable(_))
        ));
        assert!(matches!(
            resolve_input("javascript:alert(1)"),
            Err(AddressError::Unloadable(_))
        ));
    }

    #[test]
    fn malformed_url_reports_parse_error() {
        let err = resolve_input("http://[").unwrap_err();
        assert!(matches!(err, AddressError::Parse { .. }));
    }

    #[test]
    fn ip_addresses_resolve() {
        let url = resolve_input("192.168.0.1").unwrap();
        assert_eq!(url.as_str(), "https://192.168.0.1/");
    }
}
