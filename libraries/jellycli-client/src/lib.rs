//! Jellyfin API Client
//!
//! HTTP client library for browsing a Jellyfin media server.
//!
//! # Features
//!
//! - **Collections**: list a user's top-level collections
//! - **Browsing**: list the children of any folder, with episode listings
//!   sorted by index number
//! - **Downloads**: build direct download URLs for playable items
//!
//! # Example
//!
//! ```ignore
//! use jellycli_client::{JellyfinClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("http://media.example.com:8096", "u1", "k1");
//!     let client = JellyfinClient::new(config)?;
//!
//!     for item in client.collections().await? {
//!         println!("{} ({})", item.display_name(), item.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::JellyfinClient;
pub use error::{JellyfinError, Result};
pub use types::{ItemsResponse, MediaItem, ServerConfig};
