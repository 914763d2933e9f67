// Upload module: a small blocking HTTP client that pushes a zipped bundle
// to the Graph API as a multipart form, plus the archive-then-upload
// pipeline behind `ig-upload`. It is intentionally synchronous; the whole
// flow is one archive write followed by one POST.

use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;

use crate::archive::archive_directory;
use crate::browser::UrlOpener;
use crate::config::Config;
use crate::error::{Error, Result};

/// Directory the bundle is built from. Assumed to exist, not validated.
pub const BUILD_DIR: &str = "build";
/// Directory finished archives are written to. Created when missing,
/// never cleaned up.
pub const ARCHIVES_DIR: &str = "archives";

const UPLOAD_COMMENT: &str = "Uploaded via instant-games-cli";

/// Expected shape of the Graph API answer. Anything else the server sends
/// alongside `success` is irrelevant here.
#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
}

/// Performs the bundle upload. The pipeline only depends on this trait so
/// it can be driven in tests without a network.
pub trait BundleUploader {
    fn upload_bundle(&self, filename: &str, filepath: &Path) -> Result<()>;
}

/// Blocking client for the asset-hosting endpoint. Holds the app id,
/// the upload access token and the browser opener used to show the
/// developer dashboard after a successful upload.
pub struct UploadClient {
    client: Client,
    app_id: String,
    access_token: String,
    opener: Box<dyn UrlOpener>,
}

impl UploadClient {
    /// Build a client from the configuration. Fails immediately when the
    /// upload access token is absent, before any filesystem or network
    /// activity.
    pub fn new(config: &Config, opener: Box<dyn UrlOpener>) -> Result<Self> {
        let access_token = config.upload_access_token()?.to_string();
        let client = Client::builder().build()?;
        Ok(UploadClient {
            client,
            app_id: config.app_id.clone(),
            access_token,
            opener,
        })
    }

    fn assets_url(&self) -> String {
        format!("https://graph-video.facebook.com/{}/assets", self.app_id)
    }

    fn dashboard_url(&self) -> String {
        format!(
            "https://developers.facebook.com/apps/{}/instant-games/hosting/",
            self.app_id
        )
    }

    /// Interpret the raw response body. On a truthy `success` field this
    /// logs the outcome and opens the developer dashboard; every other
    /// body shape is an error carrying the body verbatim.
    fn complete_upload(&self, body: &str) -> Result<()> {
        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }

        let response: UploadResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(_) => {
                return Err(Error::InvalidResponse {
                    body: body.to_string(),
                })
            }
        };
        if !response.success {
            return Err(Error::UploadRejected {
                body: body.to_string(),
            });
        }

        println!("Bundle uploaded via the graph API");
        println!("Don't forget you need to publish the build");
        println!("Opening developer dashboard...");
        if let Err(e) = self.opener.open_url(&self.dashboard_url()) {
            eprintln!("Could not open the browser: {e}");
        }
        Ok(())
    }
}

impl BundleUploader for UploadClient {
    fn upload_bundle(&self, filename: &str, filepath: &Path) -> Result<()> {
        println!("Uploading archive: {}", filepath.display());

        let file = File::open(filepath)?;
        let asset = multipart::Part::reader(file)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new()
            .text("access_token", self.access_token.clone())
            .text("type", "BUNDLE")
            .text("comment", UPLOAD_COMMENT)
            .part("asset", asset);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message("Uploading...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.client.post(self.assets_url()).multipart(form).send();
        spinner.finish_and_clear();

        let body = result?.text()?;
        self.complete_upload(&body)
    }
}

/// File name for a bundle archived now, unique per millisecond.
pub fn archive_filename() -> String {
    format!("{}.zip", Utc::now().timestamp_millis())
}

/// Archive `build/` into `archives/<epoch-millis>.zip` and upload it.
pub fn run(uploader: &dyn BundleUploader) -> Result<()> {
    run_in(
        Path::new(BUILD_DIR),
        Path::new(ARCHIVES_DIR),
        &archive_filename(),
        uploader,
    )
}

/// The pipeline with its locations made explicit for tests: ensure the
/// archives directory exists, archive the build, upload it. An upload
/// rejection is logged to stderr and the run still ends normally; every
/// other failure propagates. The archive file is kept on every path.
pub fn run_in(
    build_dir: &Path,
    archives_dir: &Path,
    filename: &str,
    uploader: &dyn BundleUploader,
) -> Result<()> {
    if !archives_dir.exists() {
        fs::create_dir(archives_dir)?;
    }
    let filepath = archives_dir.join(filename);

    let total = archive_directory(build_dir, &filepath)?;
    println!("{total} total bytes");
    println!("archive finalized and flushed to disk");

    match uploader.upload_bundle(filename, &filepath) {
        Ok(()) => {
            println!("Success!");
            Ok(())
        }
        Err(e) if e.is_rejection() => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
