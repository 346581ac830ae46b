//! Page location handling
//!
//! Wraps the current page URL. Parsing happens once; an unparsable href is
//! kept verbatim so callers can still fall back to it.

use tracing::debug;
use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct PageLocation {
    href: String,
    parsed: Option<Url>,
}

impl PageLocation {
    pub fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let parsed = match Url::parse(&href) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(href = %href, error = %e, "page URL did not parse");
                None
            }
        };
        Self { href, parsed }
    }

    /// Strict constructor for callers that want to report a bad URL
    pub fn parse(href: &str) -> Result<Self, AppError> {
        let url = Url::parse(href).map_err(|e| AppError::InvalidUrl {
            input: href.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            href: href.to_string(),
            parsed: Some(url),
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn url(&self) -> Option<&Url> {
        self.parsed.as_ref()
    }

    pub fn hostname(&self) -> &str {
        self.parsed
            .as_ref()
            .and_then(Url::host_str)
            .unwrap_or_default()
    }

    pub fn pathname(&self) -> &str {
        self.parsed.as_ref().map(Url::path).unwrap_or_default()
    }

    /// First value of a query parameter, like `URLSearchParams.get`
    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = self.parsed.as_ref()?;
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// The current URL with one query parameter set; `None` when the URL
    /// itself is unusable.
    pub fn with_query_param(&self, name: &str, value: &str) -> Option<String> {
        let mut url = self.parsed.clone()?;
        set_query_param(&mut url, name, value);
        Some(url.into())
    }

    /// Resolve an href relative to this page
    pub fn join(&self, href: &str) -> Option<Url> {
        self.parsed.as_ref()?.join(href).ok()
    }
}

/// Set `name` to `value`, replacing the first occurrence in place and
/// dropping any later duplicates. Appends when absent.
pub fn set_query_param(url: &mut Url, name: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let mut replaced = false;
    pairs.retain_mut(|(k, v)| {
        if k.as_str() != name {
            return true;
        }
        if replaced {
            return false;
        }
        *v = value.to_string();
        replaced = true;
        true
    });
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// Path plus query string, the shape written back into relative links
pub fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}
