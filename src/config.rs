use std::env;
use std::path::PathBuf;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SESSION_PATH: &str = "session/session.json";
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin; API paths are joined below `/api/`.
    pub base_url: Url,
    pub session_path: PathBuf,
    pub google_client_id: Option<String>,
    pub page_size: usize,
}

impl Config {
    pub fn new(base_url: &str, session_path: impl Into<PathBuf>) -> Result<Self, String> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            session_path: session_path.into(),
            google_client_id: None,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("STUDIEHUB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let session_path =
            env::var("STUDIEHUB_SESSION").unwrap_or_else(|_| DEFAULT_SESSION_PATH.to_string());

        let page_size = match env::var("STUDIEHUB_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let google_client_id = env::var("STUDIEHUB_GOOGLE_CLIENT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            session_path: PathBuf::from(session_path),
            google_client_id,
            page_size,
        })
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self, String> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// URL below `/api/` built from path segments; each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join("api/")?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).map_err(|e| format!("Invalid STUDIEHUB_BASE_URL '{}': {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("Unsupported base URL scheme: {}", other)),
    }
}

pub fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err("STUDIEHUB_PAGE_SIZE must be a positive number".to_string()),
        Ok(size) => Ok(size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path() {
        let config = Config::new("https://example.com/studiehub", "s.json").unwrap();
        assert_eq!(
            config.endpoint(&["courses", "1"]).unwrap().as_str(),
            "https://example.com/studiehub/api/courses/1"
        );
        assert_eq!(
            config.endpoint(&["videos"]).unwrap().as_str(),
            "https://example.com/studiehub/api/videos"
        );
    }

    #[test]
    fn endpoint_encodes_segments() {
        let config = Config::new("http://localhost:8080", "s.json").unwrap();
        assert_eq!(
            config.endpoint(&["courses", "a b/c"]).unwrap().as_str(),
            "http://localhost:8080/api/courses/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(Config::new("ftp://example.com", "s.json").is_err());
        assert!(Config::new("not a url", "s.json").is_err());
    }

    #[test]
    fn page_size_must_be_positive() {
        assert_eq!(parse_page_size("24"), Ok(24));
        assert!(parse_page_size("0").is_err());
        assert!(parse_page_size("many").is_err());
    }
}
