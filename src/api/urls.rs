use crate::models::Post;

/// Turns a potentially server-relative media URL into an absolute one.
///
/// Absent or empty candidates resolve to `None`. Candidates starting
/// with `/` get the origin prepended; anything else is assumed to be
/// absolute already and is returned unchanged.
pub fn resolve_url(origin: &str, candidate: Option<&str>) -> Option<String> {
    let candidate = candidate?;
    if candidate.is_empty() {
        return None;
    }

    if candidate.starts_with('/') {
        Some(format!("{}{}", origin, candidate))
    } else {
        Some(candidate.to_string())
    }
}

/// Resolves `file_url` and `thumbnail_url` on every media item of a
/// post in place. The fetcher runs this on each decoded post before
/// handing the feed back to the caller.
pub fn resolve_post_media(post: &mut Post, origin: &str) {
    for item in &mut post.media {
        item.file_url = resolve_url(origin, item.file_url.as_deref());
        item.thumbnail_url = resolve_url(origin, item.thumbnail_url.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaItem, MediaType};

    #[test]
    fn test_resolve_url_relative() {
        assert_eq!(
            resolve_url("http://h", Some("/media/a.jpg")),
            Some("http://h/media/a.jpg".to_string())
        );
    }

    #[test]
    fn test_resolve_url_absolute_unchanged() {
        let absolute = "http://cdn.example.com/a.jpg";
        assert_eq!(resolve_url("http://h", Some(absolute)), Some(absolute.to_string()));
    }

    #[test]
    fn test_resolve_url_absent_or_empty() {
        assert_eq!(resolve_url("http://h", None), None);
        assert_eq!(resolve_url("http://h", Some("")), None);
    }

    #[test]
    fn test_resolve_url_no_double_prefixing() {
        let once = resolve_url("http://h", Some("/a.jpg")).unwrap();
        assert_eq!(resolve_url("http://h", Some(&once)), Some(once.clone()));
        assert_eq!(once, "http://h/a.jpg");
    }

    #[test]
    fn test_resolve_post_media_covers_both_urls() {
        let mut post = Post {
            id: 1,
            creator_id: 1,
            creator_username: None,
            caption: None,
            created_at: String::new(),
            is_for_sale: false,
            sale_item: None,
            media: vec![MediaItem {
                id: 1,
                file_url: Some("/v.mp4".to_string()),
                thumbnail_url: Some("/t.jpg".to_string()),
                media_type: MediaType::Video,
                order: 0,
            }],
        };

        resolve_post_media(&mut post, "http://h");

        assert_eq!(post.media[0].file_url.as_deref(), Some("http://h/v.mp4"));
        assert_eq!(post.media[0].thumbnail_url.as_deref(), Some("http://h/t.jpg"));
    }
}
