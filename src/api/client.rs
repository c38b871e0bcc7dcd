use log::{debug, error};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};

use crate::constants::{NGROK_SKIP_HEADER, POSTS_PATH};
use crate::error::ApiError;
use crate::models::Post;

use super::multipart::MultipartBody;
use super::resolve_post_media;
use super::upload::{encode_media, UploadMedia};

/// Client for the pottery feed API. Holds the configured origin and a
/// reusable HTTP client; constructor-injected wherever it is used so
/// tests can point it at a fake server.
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

impl ApiClient {
    pub fn new(origin: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            origin: origin.into(),
        }
    }

    /// Builds the client around an existing `reqwest::Client`, e.g. one
    /// with custom timeouts.
    pub fn with_http_client(http: reqwest::Client, origin: impl Into<String>) -> Self {
        ApiClient {
            http,
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn posts_endpoint(&self) -> String {
        format!("{}{}", self.origin, POSTS_PATH)
    }

    /// Fetches the post collection. Each call is a fresh round trip:
    /// no retries, no caching, no deduplication of concurrent calls.
    ///
    /// Media URLs on every returned post are already resolved against
    /// the configured origin.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.posts_endpoint();
        debug!("Fetching feed from {}", url);

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(NGROK_SKIP_HEADER, "true")
            .send()
            .await?;

        let status = response.status();
        debug!("Feed response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.ok();
            error!("Feed request failed with status {}", status);
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let mut posts: Vec<Post> = serde_json::from_str(&body)?;

        for post in &mut posts {
            resolve_post_media(post, &self.origin);
        }

        debug!("Decoded {} posts", posts.len());
        Ok(posts)
    }

    /// Uploads a new post: a caption (may be empty) plus exactly one
    /// image or video. Success is signaled purely by a 2xx status; the
    /// response body is not parsed.
    pub async fn upload_post(&self, caption: &str, media: UploadMedia) -> Result<(), ApiError> {
        // Media problems abort before any network call.
        let encoded = encode_media(media)?;

        let mut body = MultipartBody::new();
        body.add_text("caption", caption);
        body.add_file(
            encoded.field,
            &encoded.filename,
            &encoded.content_type,
            &encoded.bytes,
        );

        let content_type = body.content_type();
        let bytes = body.finish();

        let url = self.posts_endpoint();
        debug!(
            "Uploading post to {} ({} bytes, field '{}')",
            url,
            bytes.len(),
            encoded.field
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, bytes.len())
            .header(NGROK_SKIP_HEADER, "true")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            error!("Upload failed with status {}", status);
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Upload accepted with status {}", status);
        Ok(())
    }
}
