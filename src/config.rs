// Configuration module: resolves the environment values both tools need
// into an explicit struct once at startup, so no component reads the
// process environment on its own and tests can supply values directly.

use crate::error::{Error, Result};

/// Port the local dev server is assumed to listen on when `PORT` is unset.
pub const DEFAULT_PORT: &str = "8000";

/// Values shared by the launcher and the uploader.
///
/// The upload access token is optional here because only `ig-upload` needs
/// it; that binary calls [`Config::upload_access_token`] before touching the
/// filesystem or the network.
#[derive(Debug)]
pub struct Config {
    pub app_id: String,
    upload_access_token: Option<String>,
    pub port: String,
}

impl Config {
    /// Create a `Config` from the real process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a `Config` from any key/value lookup. An empty string counts
    /// as absent, the same as a missing variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_id = lookup("FB_APP_ID")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config("FB_APP_ID environment variable not found.".into()))?;

        let upload_access_token = lookup("FB_UPLOAD_ACCESS_TOKEN").filter(|v| !v.is_empty());

        let port = lookup("PORT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.into());

        Ok(Config {
            app_id,
            upload_access_token,
            port,
        })
    }

    /// The upload access token, or a configuration error if it was absent.
    pub fn upload_access_token(&self) -> Result<&str> {
        self.upload_access_token.as_deref().ok_or_else(|| {
            Error::Config("FB_UPLOAD_ACCESS_TOKEN environment variable not found.".into())
        })
    }
}
