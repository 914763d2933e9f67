// Library root
// -----------
// This crate exposes a small library surface shared by the two developer
// binaries (`ig-launch` and `ig-upload`).
//
// Module responsibilities:
// - `config`: Reads the app id, upload access token and port from the
//   environment into an explicit `Config` passed to every component.
// - `browser`: The `UrlOpener` collaborator used to open URLs in the
//   user's default browser (injectable so tests never spawn a browser).
// - `launcher`: Builds the embed viewer URL and opens it.
// - `archive`: Zips a build directory with its contents at the archive root.
// - `upload`: Multipart upload of the zipped bundle to the Graph API and
//   the archive-then-upload pipeline behind `ig-upload`.
// - `error`: The crate-wide error type; distinguishes fatal failures from
//   upload rejections that are only logged.
pub mod archive;
pub mod browser;
pub mod config;
pub mod error;
pub mod launcher;
pub mod upload;
