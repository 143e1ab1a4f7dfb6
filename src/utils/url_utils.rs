//! URL helpers for mapping crawled URLs onto the case directory tree.
//!
//! A URL is split into its origin (scheme, host and non-default port) and the
//! remainder (path and query). The origin becomes a single sanitized
//! directory name, the remainder is kept as nested sub-directories.

use url::{Position, Url};

/// Scheme and host of `url`, plus the port when it is not the scheme default.
///
/// Userinfo, path, query and fragment are dropped.
#[must_use]
pub fn origin_of(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let origin = match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    };
    Some(origin)
}

/// Replace every character that is not an ASCII letter or digit with `-`.
///
/// Origins that differ only in punctuation (`http://a.b` and `http://a-b`)
/// map to the same directory name.
#[must_use]
pub fn sanitize_origin(origin: &str) -> String {
    origin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Path and query of `url` with the surrounding slashes removed.
///
/// Returns an empty string when the URL points at the origin itself. The
/// fragment is never part of the remainder since it is not sent to servers.
#[must_use]
pub fn url_remainder(url: &Url) -> &str {
    url[Position::BeforePath..Position::AfterQuery].trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn origin_drops_path_query_and_userinfo() {
        assert_eq!(
            origin_of(&parse("https://user:pw@example.com/a/b?c=d#e")).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn origin_keeps_non_default_port_only() {
        assert_eq!(
            origin_of(&parse("http://example.com:8080/x")).as_deref(),
            Some("http://example.com:8080")
        );
        assert_eq!(
            origin_of(&parse("http://example.com:80/x")).as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn origin_handles_ipv6_hosts() {
        let origin = origin_of(&parse("http://[::1]:8080/x")).unwrap();
        assert_eq!(origin, "http://[::1]:8080");
        assert_eq!(sanitize_origin(&origin), "http------1--8080");
    }

    #[test]
    fn origin_requires_a_host() {
        assert_eq!(origin_of(&parse("mailto:someone@example.com")), None);
    }

    #[test]
    fn sanitize_replaces_punctuation() {
        assert_eq!(sanitize_origin("http://ex.com"), "http---ex-com");
        assert_eq!(sanitize_origin("http://a.b"), sanitize_origin("http://a-b"));
    }

    #[test]
    fn sanitize_replaces_non_ascii_letters() {
        assert_eq!(sanitize_origin("é1"), "-1");
    }

    #[test]
    fn remainder_of_origin_is_empty() {
        assert_eq!(url_remainder(&parse("http://ex.com")), "");
        assert_eq!(url_remainder(&parse("http://ex.com/")), "");
    }

    #[test]
    fn remainder_keeps_path_and_query() {
        assert_eq!(url_remainder(&parse("http://ex.com/p")), "p");
        assert_eq!(url_remainder(&parse("http://ex.com/a/b/")), "a/b");
        assert_eq!(url_remainder(&parse("http://ex.com/a?x=1#top")), "a?x=1");
    }
}
