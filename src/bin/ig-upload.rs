// Entrypoint for the uploader.
// - Resolve configuration, build the upload client (which fails here,
//   before any filesystem or network activity, when the access token is
//   missing), then run the archive-then-upload pipeline.
// - Fatal errors propagate through `anyhow` with a non-zero status; an
//   upload the server rejected is only logged and exits normally.

use instant_games_cli::browser::SystemOpener;
use instant_games_cli::config::Config;
use instant_games_cli::upload::{self, UploadClient};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let uploader = UploadClient::new(&config, Box::new(SystemOpener))?;
    upload::run(&uploader)?;
    Ok(())
}
