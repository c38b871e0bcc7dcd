use clap::Parser;
use log::info;

use crate::constants::DEFAULT_SETTINGS_FILE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(
        long,
        help = "Base origin of the pottery server, e.g. http://127.0.0.1:8000"
    )]
    pub origin: Option<String>,

    #[arg(
        long,
        default_value = DEFAULT_SETTINGS_FILE,
        help = "Path to the settings file"
    )]
    pub settings: String,

    #[arg(long, help = "Caption for a new post (used with an upload flag)")]
    pub caption: Option<String>,

    #[arg(
        long = "upload-image",
        help = "Path to an image to upload as a new post"
    )]
    pub upload_image: Option<String>,

    #[arg(
        long = "upload-video",
        help = "Path to a video to upload as a new post"
    )]
    pub upload_video: Option<String>,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        if let Some(origin) = &args.origin {
            info!("Using origin override from --origin: {}", origin);
        }
        if args.upload_image.is_some() || args.upload_video.is_some() {
            info!("Upload mode requested");
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_args_default() {
        let args = CommandLineArgs {
            origin: None,
            settings: DEFAULT_SETTINGS_FILE.to_string(),
            caption: None,
            upload_image: None,
            upload_video: None,
        };

        assert!(args.origin.is_none());
        assert!(args.upload_image.is_none());
        assert!(args.upload_video.is_none());
    }

    #[test]
    fn test_command_line_args_upload() {
        let args = CommandLineArgs {
            origin: Some("http://127.0.0.1:8000".to_string()),
            settings: DEFAULT_SETTINGS_FILE.to_string(),
            caption: Some("fresh out of the kiln".to_string()),
            upload_image: Some("/tmp/bowl.png".to_string()),
            upload_video: None,
        };

        assert_eq!(args.origin.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(args.upload_image.as_deref(), Some("/tmp/bowl.png"));
    }
}
