// Launcher flow behind `ig-launch`: build the embed viewer URL for the
// configured app and open it in a browser, pointing the embedded player at
// the local HTTPS dev server.

use crate::browser::UrlOpener;
use crate::config::Config;

/// Base path of the platform's embedded player.
pub const EMBED_BASE_URL: &str = "https://www.facebook.com/embed/instantgames/";

/// URL the local dev server is expected to be reachable at.
pub fn local_url(port: &str) -> String {
    format!("https://localhost:{port}")
}

/// Viewer URL that loads the app inside the embedded player, with the
/// local dev server as the game URL.
pub fn viewer_url(app_id: &str, port: &str) -> String {
    format!("{EMBED_BASE_URL}{app_id}/player?game_url={}", local_url(port))
}

/// Print where the platform expects the app to run and open the viewer.
/// A browser that fails to open is reported but is not an error.
pub fn launch(config: &Config, opener: &dyn UrlOpener) {
    let local = local_url(&config.port);
    let url = viewer_url(&config.app_id, &config.port);

    println!("Facebook will expect the app to be running at {local}");
    println!("Opening {url}");
    println!(
        "Since the app is running with HTTPS you might need to visit {local} \
         first and approve the certificates"
    );

    if let Err(e) = opener.open_url(&url) {
        eprintln!("Could not open the browser: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::cell::RefCell;

    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open_url(&self, url: &str) -> std::io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn viewer_url_embeds_app_id_and_local_url() {
        assert_eq!(
            viewer_url("12345", "8443"),
            "https://www.facebook.com/embed/instantgames/12345/player\
             ?game_url=https://localhost:8443"
        );
    }

    #[test]
    fn launch_opens_the_viewer_url() {
        let config = Config::from_lookup(|key| match key {
            "FB_APP_ID" => Some("12345".into()),
            "PORT" => Some("9000".into()),
            _ => None,
        })
        .unwrap();

        let opener = RecordingOpener {
            opened: RefCell::new(Vec::new()),
        };
        launch(&config, &opener);

        let opened = opener.opened.borrow();
        assert_eq!(opened.as_slice(), [viewer_url("12345", "9000")]);
    }
}
