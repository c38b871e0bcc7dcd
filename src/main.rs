use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use pottery_feed::api::{valid_origin, ApiClient, UploadMedia};
use pottery_feed::cli_args::CommandLineArgs;
use pottery_feed::feed::{FeedPhase, FeedState};
use pottery_feed::render::render_post;
use pottery_feed::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!(
        "Pottery Feed client v{} starting up...",
        env!("CARGO_PKG_VERSION")
    );

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    let settings = load_settings(&cli_args);
    let origin = resolve_origin(&cli_args, &settings)?;
    info!("Using server origin: {}", origin);

    let client = ApiClient::new(&origin);

    if cli_args.upload_image.is_some() || cli_args.upload_video.is_some() {
        run_upload(&client, &cli_args).await?;
    } else {
        run_feed(&client, &settings).await?;
    }

    let elapsed = start_time.elapsed();
    info!("Done in {:.2} seconds", elapsed.as_secs_f64());
    Ok(())
}

fn load_settings(cli_args: &CommandLineArgs) -> Settings {
    match Settings::load(&cli_args.settings) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                "Could not load settings ({}). Falling back to defaults.",
                e
            );
            Settings::default()
        }
    }
}

fn resolve_origin(cli_args: &CommandLineArgs, settings: &Settings) -> Result<String> {
    let origin = cli_args
        .origin
        .clone()
        .unwrap_or_else(|| settings.base_origin.clone());

    if !valid_origin(&origin) {
        return Err(anyhow::anyhow!(
            "Invalid origin '{}'. Expected http(s)://host[:port] with no trailing slash",
            origin
        ));
    }

    Ok(origin)
}

async fn run_feed(client: &ApiClient, settings: &Settings) -> Result<()> {
    info!("Loading feed from {}...", client.origin());

    let mut state = FeedState::new();
    state.load_posts(client).await;

    match state.phase() {
        FeedPhase::Loaded => {
            info!("Loaded {} posts", state.posts().len());
            for post in state.posts() {
                println!("{}\n", render_post(post, settings));
            }
            Ok(())
        }
        FeedPhase::Failed(message) => Err(anyhow::anyhow!("{}", message)),
        // load_posts always completes into Loaded or Failed
        _ => Err(anyhow::anyhow!("Feed load did not complete")),
    }
}

async fn run_upload(client: &ApiClient, cli_args: &CommandLineArgs) -> Result<()> {
    let caption = cli_args.caption.clone().unwrap_or_default();

    // The uploader takes exactly one media kind; the CLI flow enforces it.
    let media = match (&cli_args.upload_image, &cli_args.upload_video) {
        (Some(_), Some(_)) => {
            return Err(anyhow::anyhow!(
                "Pass either --upload-image or --upload-video, not both"
            ));
        }
        (Some(image_path), None) => {
            debug!("Opening image {}", image_path);
            let img = image::open(image_path)
                .with_context(|| format!("Failed to open image: {}", image_path))?;
            UploadMedia::Image(img)
        }
        (None, Some(video_path)) => UploadMedia::Video(PathBuf::from(video_path)),
        (None, None) => {
            return Err(anyhow::anyhow!(
                "Upload requested without --upload-image or --upload-video"
            ));
        }
    };

    info!("Uploading post to {}...", client.origin());
    client
        .upload_post(&caption, media)
        .await
        .context("Upload failed")?;

    info!("Post uploaded successfully");
    Ok(())
}
