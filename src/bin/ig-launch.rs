// Entrypoint for the launcher.
// - Keeps `main` small: resolve configuration, then hand it to the
//   launcher flow with the real browser opener.
// - Returns `anyhow::Result` so a missing FB_APP_ID terminates the
//   process with a non-zero status before anything else happens.

use instant_games_cli::{browser::SystemOpener, config::Config, launcher};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    launcher::launch(&config, &SystemOpener);
    Ok(())
}
