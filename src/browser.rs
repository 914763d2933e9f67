// Browser-opening collaborator. Both tools end by opening a URL in the
// user's default browser; putting that behind a trait keeps the launcher
// and upload pipeline testable without spawning anything.

/// Opens a URL in the user's default interactive browser.
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> std::io::Result<()>;
}

/// The real opener, backed by the `open` crate.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}
