use std::time::Duration;

use url::Url;

use crate::method::Method;

/// How a transport may use cached responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachePolicy {
    /// Follow the protocol's caching rules.
    #[default]
    UseProtocolCachePolicy,
    ReloadIgnoringLocalCacheData,
    ReloadIgnoringLocalAndRemoteCacheData,
    ReturnCacheDataElseLoad,
    ReturnCacheDataDontLoad,
    ReloadRevalidatingCacheData,
}

/// Ordered header list with case-insensitive names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderList {
    entries: Vec<(String, String)>,
}

impl HeaderList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an existing entry in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Set `name` only if it is not present yet.
    pub fn set_if_absent(&mut self, name: &str, value: &str) {
        if !self.contains(name) {
            self.entries.push((name.to_owned(), value.to_owned()));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

/// Everything a transport needs to send one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Option<Url>,
    pub headers: HeaderList,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
    /// Overrides [`SessionConfig::timeout`] for this request.
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}

/// Session-level configuration shared by the requests a transport sends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Total time allowed for one exchange.
    pub timeout: Option<Duration>,
    /// Time allowed to establish the connection.
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    /// Sent with every request that does not set the header itself.
    pub default_headers: HeaderList,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.set(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_case_insensitive() {
        let mut headers = HeaderList::new();
        headers.set("Content-Type", "text/plain");
        headers.set("content-type", "application/json");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn replacement_keeps_position() {
        let mut headers: HeaderList = [("A", "1"), ("B", "2")].into_iter().collect();
        headers.set("a", "3");
        let names: Vec<_> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "B"]);
    }

    #[test]
    fn set_if_absent_respects_existing() {
        let mut headers = HeaderList::new();
        headers.set("Accept", "text/html");
        headers.set_if_absent("accept", "application/json");
        headers.set_if_absent("User-Agent", "rbuilder");
        assert_eq!(headers.get("Accept"), Some("text/html"));
        assert_eq!(headers.get("user-agent"), Some("rbuilder"));
    }

    #[test]
    fn session_builder_methods() {
        let config = SessionConfig::new()
            .timeout(Duration::from_secs(5))
            .user_agent("rbuilder/0.1")
            .default_header("X-Trace", "on");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent.as_deref(), Some("rbuilder/0.1"));
        assert_eq!(config.default_headers.get("x-trace"), Some("on"));
    }
}
