mod client;
mod multipart;
mod upload;
mod urls;
mod validation;

pub use client::ApiClient;
pub use multipart::MultipartBody;
pub use upload::{video_mime_and_filename, UploadMedia};
pub use urls::{resolve_post_media, resolve_url};
pub use validation::valid_origin;
