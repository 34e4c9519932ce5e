use crate::config::HttpConfig;
use crate::error::{ExportError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

static HTTP_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Where the foursome list page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Anything starting with `http://` or `https://` (any case) is a URL.
    pub fn parse(raw: &str) -> Self {
        if HTTP_SCHEME.is_match(raw) {
            Source::Url(raw.to_string())
        } else {
            Source::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the page as UTF-8 text.
///
/// Undecodable bytes are replaced with U+FFFD for URL sources and dropped
/// for local files.
pub fn load_html(source: &Source, http: &HttpConfig) -> Result<String> {
    let html = match source {
        Source::Url(url) => {
            let bytes = fetch_url(url, http)?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        Source::File(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| ExportError::source_unavailable(path.display().to_string(), e))?;
            decode_dropping_invalid(&bytes)
        }
    };
    info!("Loaded {} bytes from {}", html.len(), source);
    Ok(html)
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn fetch_url(url: &str, http: &HttpConfig) -> Result<Vec<u8>> {
    let unavailable = |e: reqwest::Error| ExportError::source_unavailable(url, e);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(http.timeout_seconds))
        .user_agent(http.user_agent.as_str())
        .build()
        .map_err(unavailable)?;

    info!("HTTP GET request to: {}", url);
    let resp = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .map_err(unavailable)?;
    info!("HTTP response: status={}", resp.status().as_u16());

    let bytes = resp.bytes().map_err(unavailable)?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_parse_detects_urls() {
        assert_eq!(
            Source::parse("https://mgatour.com/events/foursome-list/17116"),
            Source::Url("https://mgatour.com/events/foursome-list/17116".to_string())
        );
        assert!(matches!(Source::parse("HTTP://example.com"), Source::Url(_)));
        assert!(matches!(Source::parse("page.html"), Source::File(_)));
        assert!(matches!(Source::parse("ftp://example.com"), Source::File(_)));
    }

    #[test]
    fn test_load_html_drops_undecodable_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>caf\xE9</p>").unwrap();

        let source = Source::File(file.path().to_path_buf());
        let html = load_html(&source, &HttpConfig::default()).unwrap();
        assert_eq!(html, "<p>caf</p>");
    }

    #[test]
    fn test_decode_keeps_valid_multibyte_text() {
        assert_eq!(decode_dropping_invalid("Jos\u{e9}".as_bytes()), "Jos\u{e9}");
        assert_eq!(decode_dropping_invalid(b"Jos\xE9 Ruiz\xFF"), "Jos Ruiz");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("missing.html"));
        let err = load_html(&source, &HttpConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_unreachable_url_is_source_unavailable() {
        let http = HttpConfig {
            timeout_seconds: 2,
            ..HttpConfig::default()
        };
        // Port 9 on localhost is the discard port and is normally closed.
        let source = Source::Url("http://127.0.0.1:9/foursomes".to_string());
        let err = load_html(&source, &http).unwrap_err();
        assert!(matches!(err, ExportError::SourceUnavailable { .. }));
    }
}
