use std::fmt;

use crate::components::UrlComponents;

/// URL scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
    /// Any other scheme, written without the trailing `:`.
    Custom(String),
}

impl Scheme {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Custom(scheme) => scheme,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One component of a URL block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UrlPart {
    /// Contributes nothing.
    #[default]
    Empty,
    Scheme(Scheme),
    Host(String),
    Port(u16),
    /// A path segment (or several, `/`-separated), appended to the path.
    Path(String),
    /// Query entries appended in order; `None` values render as bare keys.
    Query(Vec<(String, Option<String>)>),
    /// Children applied in order.
    Combined(Vec<UrlPart>),
}

impl UrlPart {
    #[must_use]
    pub fn scheme(scheme: Scheme) -> Self {
        Self::Scheme(scheme)
    }

    #[must_use]
    pub fn host(host: impl Into<String>) -> Self {
        Self::Host(host.into())
    }

    #[must_use]
    pub fn port(port: u16) -> Self {
        Self::Port(port)
    }

    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// A single `name=value` query entry.
    #[must_use]
    pub fn query(name: impl Into<String>, value: impl ToString) -> Self {
        Self::Query(vec![(name.into(), Some(value.to_string()))])
    }

    /// A query key without a value (`?flag`).
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self::Query(vec![(name.into(), None)])
    }

    /// Query entries from a mapping, in the mapping's iteration order.
    #[must_use]
    pub fn query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Self::Query(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), Some(value.to_string())))
                .collect(),
        )
    }

    /// Apply this part to `components`.
    pub fn apply(&self, components: &mut UrlComponents) {
        match self {
            Self::Empty => {}
            Self::Scheme(scheme) => components.scheme = Some(scheme.clone()),
            Self::Host(host) => components.host = Some(host.clone()),
            Self::Port(port) => components.port = Some(*port),
            Self::Path(path) => components.push_path(path),
            Self::Query(entries) => components.query.extend(entries.iter().cloned()),
            Self::Combined(children) => {
                for child in children {
                    child.apply(components);
                }
            }
        }
    }
}

impl From<Scheme> for UrlPart {
    fn from(scheme: Scheme) -> Self {
        Self::Scheme(scheme)
    }
}
