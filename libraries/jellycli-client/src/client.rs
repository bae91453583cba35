//! Jellyfin API client.

use crate::error::{JellyfinError, Result};
use crate::types::{ItemsResponse, MediaItem, ServerConfig};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client name reported in the authorization header.
const CLIENT_NAME: &str = "JellyCli";
/// Device string reported in the authorization header.
const DEVICE_NAME: &str = "Rust";
/// Fixed device id; the server only uses it to tell sessions apart.
const DEVICE_ID: &str = "1";

/// Header carrying the structured MediaBrowser credential string.
const AUTH_HEADER: &str = "X-Emby-Authorization";

/// Client for browsing a Jellyfin server's item hierarchy.
///
/// The authorization header is built once at construction; there is no
/// token refresh or re-authentication.
///
/// # Example
///
/// ```ignore
/// use jellycli_client::{JellyfinClient, ServerConfig};
///
/// let config = ServerConfig::new("http://media.example.com:8096", "u1", "k1");
/// let client = JellyfinClient::new(config)?;
///
/// let collections = client.collections().await?;
/// println!("Found {} collections", collections.len());
/// ```
#[derive(Debug)]
pub struct JellyfinClient {
    http: Client,
    host: String,
    user_id: String,
    auth_key: String,
}

impl JellyfinClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.host.is_empty() {
            return Err(JellyfinError::InvalidUrl("URL cannot be empty".into()));
        }

        // Normalize the host: query paths are appended verbatim below.
        let host = config.host.trim_end_matches('/').to_string();
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(JellyfinError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let credential = format!(
            "MediaBrowser Client=\"{}\", Device=\"{}\", DeviceId=\"{}\", Version=\"{}\", Token=\"{}\"",
            CLIENT_NAME,
            DEVICE_NAME,
            DEVICE_ID,
            env!("CARGO_PKG_VERSION"),
            config.auth_key
        );
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTH_HEADER,
            HeaderValue::from_str(&credential)
                .map_err(|e| JellyfinError::InvalidAuthKey(e.to_string()))?,
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .user_agent(format!("{}/{}", CLIENT_NAME, env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(JellyfinError::Request)?;

        Ok(Self {
            http,
            host,
            user_id: config.user_id,
            auth_key: config.auth_key,
        })
    }

    /// Normalized base URL of the server.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// List top-level collections for the configured user.
    pub async fn collections(&self) -> Result<Vec<MediaItem>> {
        let url = format!(
            "{}/Items?userId={}",
            self.host,
            urlencoding::encode(&self.user_id)
        );
        self.fetch_items(&url).await
    }

    /// List the children of a folder.
    ///
    /// Episode listings come back sorted ascending by index number, with a
    /// missing index treated as 0; the sort is stable, so ties keep the
    /// server's order. Everything else is returned in server order.
    pub async fn children(&self, parent_id: &str) -> Result<Vec<MediaItem>> {
        let url = format!(
            "{}/Items?parentId={}",
            self.host,
            urlencoding::encode(parent_id)
        );
        let mut items = self.fetch_items(&url).await?;

        let first_is_episode =
            items.first().and_then(|i| i.item_type.as_deref()) == Some("Episode");
        if first_is_episode {
            items.sort_by_key(|i| i.index_number.unwrap_or(0));
        }

        Ok(items)
    }

    /// Direct download URL for an item. No request is made; the same
    /// inputs always produce the same string.
    pub fn download_url(&self, item_id: &str) -> String {
        format!(
            "{}/Items/{}/Download?api_key={}",
            self.host,
            item_id,
            urlencoding::encode(&self.auth_key)
        )
    }

    async fn fetch_items(&self, url: &str) -> Result<Vec<MediaItem>> {
        debug!(url = %url, "Fetching items");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ItemsResponse = response.json().await.map_err(|e| {
                JellyfinError::ParseError(format!("Failed to parse items response: {}", e))
            })?;

            debug!(items = body.items.len(), "Fetched items");
            Ok(body.items)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(JellyfinError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(host: &str) -> Result<JellyfinClient> {
        JellyfinClient::new(ServerConfig::new(host, "u1", "k1"))
    }

    #[test]
    fn test_url_validation() {
        assert!(client("https://example.com").is_ok());
        assert!(client("http://localhost:8096").is_ok());

        assert!(client("").is_err());
        assert!(client("not-a-url").is_err());
        assert!(client("ftp://example.com").is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = client("http://srv:8096/").expect("valid url");
        assert_eq!(client.host(), "http://srv:8096");
    }

    #[test]
    fn test_download_url_is_deterministic() {
        let client = client("http://srv:8096").expect("valid url");
        let url = client.download_url("abc123");

        assert_eq!(url, client.download_url("abc123"));
        assert_eq!(url, "http://srv:8096/Items/abc123/Download?api_key=k1");
    }
}
