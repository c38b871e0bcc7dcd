use crate::models::{MediaType, Post};
use crate::settings::Settings;

/// Plain-text rendering of a post for the terminal feed view.
pub fn render_post(post: &Post, settings: &Settings) -> String {
    let mut lines = Vec::new();

    let creator = post
        .creator_username
        .as_deref()
        .unwrap_or("[unknown potter]");
    lines.push(format!("Post #{} by {}", post.id, creator));

    if settings.show_timestamps {
        lines.push(format!("  {}", display_timestamp(&post.created_at)));
    }

    if let Some(caption) = post.caption.as_deref() {
        if !caption.is_empty() {
            lines.push(format!("  {}", caption));
        }
    }

    if settings.show_sale_info {
        if let Some(price) = post.display_price() {
            let sold = post
                .sale_item
                .as_ref()
                .map(|item| item.is_sold)
                .unwrap_or(false);
            if sold {
                lines.push(format!("  For sale: {} (sold)", price));
            } else {
                lines.push(format!("  For sale: {}", price));
            }
        }
    }

    if let Some(cover) = post.cover_image_url() {
        lines.push(format!("  Cover: {}", cover));
    }

    for item in &post.media {
        match item.media_type {
            MediaType::Image | MediaType::Video => {
                if let Some(url) = item.file_url.as_deref() {
                    lines.push(format!("  [{:?}] {}", item.media_type, url));
                }
            }
            MediaType::Unknown => {
                // Unrecognized server type: placeholder, never a failure.
                lines.push("  [unsupported media]".to_string());
            }
        }
    }

    lines.join("\n")
}

/// Pretty-prints the server timestamp when it parses as ISO-8601.
/// Display-only; the raw string is shown verbatim when it does not.
fn display_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
