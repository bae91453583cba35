//! Types for Jellyfin API requests and responses.

use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Jellyfin server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "http://media.example.com:8096")
    pub host: String,
    /// Id of the user whose collections are listed
    pub user_id: String,
    /// API key sent in the authorization header
    pub auth_key: String,
}

impl ServerConfig {
    /// Create a new server config.
    pub fn new(
        host: impl Into<String>,
        user_id: impl Into<String>,
        auth_key: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user_id: user_id.into(),
            auth_key: auth_key.into(),
        }
    }
}

// =============================================================================
// Item Types
// =============================================================================

/// A node in the server's media hierarchy (folder or playable file).
///
/// Items are built fresh from each API response and never mutated after
/// construction, apart from the sort pass applied to episode listings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_folder: bool,
    /// Kind of node ("CollectionFolder", "Series", "Episode", ...)
    #[serde(rename = "Type")]
    pub item_type: Option<String>,
    /// Present on playable video items ("VideoFile", "Iso", ...)
    pub video_type: Option<String>,
    /// Episode number within a season
    pub index_number: Option<i32>,
}

impl MediaItem {
    /// Name to show the user; the server may omit `Name`.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }
}

/// Envelope around the `/Items` endpoints.
///
/// A body without an `Items` key deserializes to an empty list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_unknown() {
        let item = MediaItem {
            id: "1".to_string(),
            name: String::new(),
            is_folder: false,
            item_type: None,
            video_type: None,
            index_number: None,
        };
        assert_eq!(item.display_name(), "Unknown");
    }

    #[test]
    fn items_key_is_optional() {
        let response: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }
}
