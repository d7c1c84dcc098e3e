use tracing::debug;
use url::Url;

use crate::part::{Scheme, UrlPart};

/// The record URL parts are folded into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlComponents {
    pub scheme: Option<Scheme>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Always empty or starting with `/`.
    pub path: String,
    pub query: Vec<(String, Option<String>)>,
}

impl UrlComponents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Components with `part` applied.
    #[must_use]
    pub fn from_part(part: &UrlPart) -> Self {
        let mut components = Self::new();
        part.apply(&mut components);
        components
    }

    /// Append a path segment, adding the leading `/` when missing.
    pub fn push_path(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if !segment.starts_with('/') {
            self.path.push('/');
        }
        self.path.push_str(segment);
    }

    /// Resolve the components into a URL.
    ///
    /// Returns `None` when no scheme was given, when an `http` or `https` URL
    /// has no host, or when the host is not a bare host name. Path characters
    /// such as `?` and `#` are percent-encoded into the path.
    #[must_use]
    pub fn url(&self) -> Option<Url> {
        let Some(scheme) = &self.scheme else {
            debug!("url resolution failed: no scheme");
            return None;
        };

        let mut url = match &self.host {
            Some(host) => {
                if !is_plain_host(host) {
                    debug!(%scheme, host = host.as_str(), "url resolution failed: invalid host");
                    return None;
                }
                let mut url = parse(&format!("{scheme}://{host}"))?;
                if let Some(port) = self.port {
                    if url.set_port(Some(port)).is_err() {
                        debug!(%scheme, port, "url resolution failed: port not allowed");
                        return None;
                    }
                }
                url
            }
            None if matches!(scheme, Scheme::Http | Scheme::Https) => {
                debug!(%scheme, "url resolution failed: no host");
                return None;
            }
            None if self.path.is_empty() => parse(&format!("{scheme}:"))?,
            None => parse(&format!("{scheme}:/"))?,
        };

        if !self.path.is_empty() {
            url.set_path(&self.path);
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                match value {
                    Some(value) => pairs.append_pair(name, value),
                    None => pairs.append_key_only(name),
                };
            }
        }
        Some(url)
    }
}

/// A host string that cannot spill into the userinfo, port, path, query or
/// fragment of the URL. Bracketed IPv6 literals are allowed.
fn is_plain_host(host: &str) -> bool {
    !host.is_empty()
        && !host.contains(['/', '?', '#', '@', '\\'])
        && (host.starts_with('[') || !host.contains(':'))
}

fn parse(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            debug!(url = raw, error = %err, "url resolution failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn path_segments_get_separators() {
        let mut components = UrlComponents::new();
        components.push_path("a");
        components.push_path("/b");
        components.push_path("");
        components.push_path("c/d");
        assert_eq!(components.path, "/a/b/c/d");
    }

    #[test]
    fn port_and_flag() {
        let components = UrlComponents::from_part(&UrlPart::Combined(vec![
            UrlPart::scheme(Scheme::Http),
            UrlPart::host("localhost"),
            UrlPart::port(8080),
            UrlPart::flag("debug"),
        ]));
        let url = components.url().map(String::from);
        assert_eq!(url.as_deref(), Some("http://localhost:8080/?debug"));
    }

    #[test]
    fn custom_scheme_without_host() {
        let components = UrlComponents::from_part(&UrlPart::Combined(vec![
            UrlPart::scheme(Scheme::Custom("myapp".into())),
            UrlPart::path("settings"),
        ]));
        assert_eq!(
            components.url().map(String::from).as_deref(),
            Some("myapp:/settings")
        );
    }

    #[traced_test]
    #[test]
    fn missing_host_is_none() {
        let components = UrlComponents::from_part(&UrlPart::Combined(vec![
            UrlPart::scheme(Scheme::Https),
            UrlPart::path("item"),
        ]));
        assert!(components.url().is_none());
        assert!(logs_contain("no host"));
    }

    #[traced_test]
    #[test]
    fn unparsable_host_is_none() {
        let components = UrlComponents::from_part(&UrlPart::Combined(vec![
            UrlPart::scheme(Scheme::Https),
            UrlPart::host("exa mple.com"),
        ]));
        assert!(components.url().is_none());
        assert!(logs_contain("url resolution failed"));
    }

    #[test]
    fn reserved_path_characters_stay_in_the_path() {
        let components = UrlComponents::from_part(&UrlPart::Combined(vec![
            UrlPart::scheme(Scheme::Https),
            UrlPart::host("rakuten.co.jp"),
            UrlPart::path("item?id=1#top"),
            UrlPart::query("q", 123),
        ]));
        let url = components.url();
        assert_eq!(
            url.as_ref().map(Url::as_str),
            Some("https://rakuten.co.jp/item%3Fid=1%23top?q=123")
        );
        assert_eq!(url.as_ref().and_then(Url::query), Some("q=123"));
        assert_eq!(url.as_ref().and_then(Url::fragment), None);
    }

    #[traced_test]
    #[test]
    fn host_with_path_is_none() {
        for host in ["evil.com/x", "user@evil.com", "evil.com:99", "evil.com?x", "evil.com#x"] {
            let components = UrlComponents::from_part(&UrlPart::Combined(vec![
                UrlPart::scheme(Scheme::Https),
                UrlPart::host(host),
                UrlPart::path("item"),
            ]));
            assert!(components.url().is_none(), "{host}");
        }
        assert!(logs_contain("invalid host"));
    }

    #[test]
    fn ipv6_host_keeps_port() {
        let components = UrlComponents::from_part(&UrlPart::Combined(vec![
            UrlPart::scheme(Scheme::Http),
            UrlPart::host("[::1]"),
            UrlPart::port(8080),
            UrlPart::path("health"),
        ]));
        assert_eq!(
            components.url().map(String::from).as_deref(),
            Some("http://[::1]:8080/health")
        );
    }

    #[traced_test]
    #[test]
    fn missing_scheme_is_none() {
        let components = UrlComponents::from_part(&UrlPart::host("example.com"));
        assert!(components.url().is_none());
        assert!(logs_contain("no scheme"));
    }
}
