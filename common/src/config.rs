//! API endpoint configuration
//!
//! One explicit config value is built at startup and handed to every
//! controller, so tests can point the client at a double instead of a
//! live backend.

/// Thumbnail size requested for gallery cards (cover-cropped).
pub const THUMB_WIDTH: u32 = 400;
pub const THUMB_HEIGHT: u32 = 300;

/// Backend endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the headless CMS, without trailing slash.
    pub base_url: String,
    /// Name of the item collection holding the records.
    pub collection: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.into(),
        }
    }

    /// Collection endpoint, used for both listing and creating items.
    pub fn items_url(&self) -> String {
        format!("{}/items/{}", self.base_url, self.collection)
    }

    /// File upload endpoint.
    pub fn files_url(&self) -> String {
        format!("{}/files", self.base_url)
    }

    /// Asset URL for an uploaded file id, requesting the fixed
    /// gallery thumbnail size.
    pub fn asset_url(&self, file_id: &str) -> String {
        format!(
            "{}/assets/{}?width={}&height={}&fit=cover",
            self.base_url, file_id, THUMB_WIDTH, THUMB_HEIGHT
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://192.168.1.128/minerals", "minerals")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url() {
        let config = ApiConfig::new("http://example.test/cms", "minerals");
        assert_eq!(config.items_url(), "http://example.test/cms/items/minerals");
    }

    #[test]
    fn test_files_url() {
        let config = ApiConfig::new("http://example.test/cms", "minerals");
        assert_eq!(config.files_url(), "http://example.test/cms/files");
    }

    #[test]
    fn test_asset_url_requests_thumbnail() {
        let config = ApiConfig::new("http://example.test/cms", "minerals");
        assert_eq!(
            config.asset_url("abc-123"),
            "http://example.test/cms/assets/abc-123?width=400&height=300&fit=cover"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://example.test/cms/", "minerals");
        assert_eq!(config.items_url(), "http://example.test/cms/items/minerals");
    }

    #[test]
    fn test_default_points_at_the_museum_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.collection, "minerals");
        assert!(config.base_url.starts_with("http://"));
    }
}
