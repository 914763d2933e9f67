/// All errors that can occur while launching or uploading a build.
///
/// Most variants are fatal: they bubble up through `main` and terminate the
/// process with a non-zero status. The two rejection variants describe a
/// server that answered but refused the upload; the pipeline logs those to
/// stderr and the process ends normally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upload failed. Nothing was returned.")]
    EmptyResponse,

    #[error("Upload failed. Unexpected Graph API response: {body}")]
    UploadRejected { body: String },

    #[error("Upload failed. Invalid response: {body}")]
    InvalidResponse { body: String },
}

impl Error {
    /// True for responses where the server answered but did not accept the
    /// bundle. These are logged rather than crashing the process.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::UploadRejected { .. } | Error::InvalidResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
