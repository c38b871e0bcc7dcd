use log::{debug, error};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::Post;

/// Presentation phase of the feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Holds the current feed for presentation: one load at a time in the
/// common case, with a full replace on success.
///
/// Overlapping loads are tolerated: each load takes a generation token
/// at start, and a completion older than the most recently started load
/// is discarded so a slow early response cannot overwrite a newer one.
pub struct FeedState {
    posts: Vec<Post>,
    phase: FeedPhase,
    generation: u64,
}

impl FeedState {
    pub fn new() -> Self {
        FeedState {
            posts: Vec::new(),
            phase: FeedPhase::Idle,
            generation: 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FeedPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetches the feed and applies the result. Equivalent to
    /// `begin_load` + `complete_load` around a fetch.
    pub async fn load_posts(&mut self, client: &ApiClient) {
        let token = self.begin_load();
        let result = client.fetch_posts().await;
        self.complete_load(token, result);
    }

    /// Marks the start of a load: clears any prior error, enters
    /// `Loading`, and returns the generation token the completion must
    /// present.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FeedPhase::Loading;
        debug!("Feed load started (generation {})", self.generation);
        self.generation
    }

    /// Applies a load result. Stale completions (a newer load has
    /// started since this token was taken) are dropped on the floor.
    pub fn complete_load(&mut self, token: u64, result: Result<Vec<Post>, ApiError>) {
        if token != self.generation {
            debug!(
                "Discarding stale feed result (generation {} < {})",
                token, self.generation
            );
            return;
        }

        match result {
            Ok(posts) => {
                debug!("Feed loaded with {} posts", posts.len());
                self.posts = posts;
                self.phase = FeedPhase::Loaded;
            }
            Err(err) => {
                error!("Failed to load feed: {}", err);
                self.phase = FeedPhase::Failed(format!("Failed to load: {}", err));
            }
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
