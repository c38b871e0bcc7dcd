/// Path of the posts collection, relative to the configured origin
pub const POSTS_PATH: &str = "/api/posts/";

/// Header that tells an ngrok tunnel to skip its browser warning page
pub const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

/// JPEG compression quality for uploaded images (out of 100)
pub const JPEG_QUALITY: u8 = 80;

/// Length of the random multipart boundary token
pub const BOUNDARY_TOKEN_LEN: usize = 16;

/// Default settings file location
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Origin used when neither a settings file nor --origin is available
pub const DEFAULT_LOCAL_ORIGIN: &str = "http://127.0.0.1:8000";
