use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use log::debug;

use crate::constants::JPEG_QUALITY;
use crate::error::ApiError;

/// Media attached to a new post. Exactly one of image or video per
/// upload, enforced by the type itself.
pub enum UploadMedia {
    /// A still image, re-encoded as JPEG before upload.
    Image(DynamicImage),
    /// A video asset referenced by its location on disk.
    Video(PathBuf),
}

/// A media payload ready to be attached to the multipart body.
#[derive(Debug)]
pub(crate) struct EncodedMedia {
    pub field: &'static str,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Prepares the media payload. Any failure here aborts the upload
/// before a network call happens.
pub(crate) fn encode_media(media: UploadMedia) -> Result<EncodedMedia, ApiError> {
    match media {
        UploadMedia::Image(img) => {
            debug!("Re-encoding image as JPEG at quality {}", JPEG_QUALITY);
            let mut bytes = Vec::new();
            let mut encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            let rgb = img.to_rgb8();
            encoder
                .encode_image(&rgb)
                .map_err(|e| ApiError::MediaEncoding(e.to_string()))?;

            Ok(EncodedMedia {
                field: "image",
                filename: "upload.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes,
            })
        }
        UploadMedia::Video(path) => {
            debug!("Reading video asset from {:?}", path);
            let bytes = fs::read(&path)?;
            let (content_type, filename) = video_mime_and_filename(&path);

            Ok(EncodedMedia {
                field: "video",
                filename,
                content_type,
                bytes,
            })
        }
    }
}

/// MIME type and upload filename from the video's file extension.
/// Anything that is not `.mov` or `.mp4` falls back to `video/mp4`
/// while keeping the original extension in the filename.
pub fn video_mime_and_filename(path: &Path) -> (String, String) {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "mov" => ("video/quicktime".to_string(), "upload.mov".to_string()),
        "mp4" | "" => ("video/mp4".to_string(), "upload.mp4".to_string()),
        other => ("video/mp4".to_string(), format!("upload.{}", other)),
    }
}
