use serde::Deserialize;

use crate::api::resolve_url;

/// A feed entry. Immutable value record scoped to a single fetch; the
/// feed state holder replaces its whole list on every successful fetch.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "creator")]
    pub creator_id: i64,
    #[serde(default)]
    pub creator_username: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// ISO-8601 timestamp string. Opaque to the client: displayed,
    /// never parsed for logic.
    pub created_at: String,
    pub is_for_sale: bool,
    #[serde(default)]
    pub sale_item: Option<SaleItem>,
    /// Server-ordered; the first item is the cover.
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: i64,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub media_type: MediaType,
    pub order: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SaleItem {
    pub id: i64,
    /// Decimal transported as a string to avoid float rounding.
    /// Displayed verbatim, never parsed arithmetically.
    pub price: String,
    pub is_sold: bool,
}

/// Closed enumeration of server-sent media types. Anything the server
/// sends that we do not recognize decodes as `Unknown` so the feed
/// renders a placeholder instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Unknown,
}

impl Post {
    /// URL to show in summary/grid views, chosen from the first media
    /// item. Images use their file URL; videos prefer their thumbnail
    /// and fall back to the file URL. Expects media URLs already
    /// resolved against the origin (the fetcher does this).
    pub fn cover_image_url(&self) -> Option<String> {
        let first = self.media.first()?;

        match first.media_type {
            MediaType::Image => non_empty(first.file_url.as_deref()),
            MediaType::Video => non_empty(first.thumbnail_url.as_deref())
                .or_else(|| non_empty(first.file_url.as_deref())),
            MediaType::Unknown => None,
        }
    }

    /// Same rule, but resolving against an origin on the fly. Used when
    /// the post has not gone through the fetcher's normalization pass.
    pub fn cover_image_url_against(&self, origin: &str) -> Option<String> {
        let first = self.media.first()?;

        match first.media_type {
            MediaType::Image => resolve_url(origin, first.file_url.as_deref()),
            MediaType::Video => resolve_url(origin, first.thumbnail_url.as_deref())
                .or_else(|| resolve_url(origin, first.file_url.as_deref())),
            MediaType::Unknown => None,
        }
    }

    /// Price tag for display, `$`-prefixed, verbatim from the server.
    /// A for-sale post with a missing sale item is treated as not for
    /// sale rather than an error.
    pub fn display_price(&self) -> Option<String> {
        if !self.is_for_sale {
            return None;
        }

        self.sale_item
            .as_ref()
            .map(|item| format!("${}", item.price))
    }
}

fn non_empty(candidate: Option<&str>) -> Option<String> {
    match candidate {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}
