//! CLI configuration

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Stitch service base URL
    pub base_url: String,

    /// Raw "Name: value" header strings from the command line
    pub headers: Vec<String>,

    /// Delay between status polls
    pub poll_delay: Duration,

    /// Maximum number of pending observations before giving up
    pub max_pending_polls: u32,
}

impl Config {
    /// Parse the raw header strings into a header map
    ///
    /// Headers are opaque to the client; they are attached verbatim to every
    /// request. Strings that do not split as `Name: value` are rejected.
    pub fn auth_headers(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();

        for raw in &self.headers {
            let (name, value) = raw
                .split_once(':')
                .with_context(|| format!("invalid header {raw:?}, expected \"Name: value\""))?;

            let name = HeaderName::try_from(name.trim())
                .with_context(|| format!("invalid header name in {raw:?}"))?;
            let value = HeaderValue::try_from(value.trim())
                .with_context(|| format!("invalid header value in {raw:?}"))?;

            map.insert(name, value);
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_headers(headers: Vec<&str>) -> Config {
        Config {
            base_url: "http://localhost:8080".to_string(),
            headers: headers.into_iter().map(String::from).collect(),
            poll_delay: Duration::from_secs(3),
            max_pending_polls: 10,
        }
    }

    #[test]
    fn test_parses_headers() {
        let config = config_with_headers(vec![
            "Authorization: Bearer abc123",
            "X-Session-Id:deadbeef",
        ]);

        let map = config.auth_headers().unwrap();
        assert_eq!(map.get("authorization").unwrap(), "Bearer abc123");
        assert_eq!(map.get("x-session-id").unwrap(), "deadbeef");
    }

    #[test]
    fn test_rejects_header_without_separator() {
        let config = config_with_headers(vec!["not-a-header"]);
        assert!(config.auth_headers().is_err());
    }

    #[test]
    fn test_no_headers_yields_empty_map() {
        let config = config_with_headers(vec![]);
        assert!(config.auth_headers().unwrap().is_empty());
    }
}
