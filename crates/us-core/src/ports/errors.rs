use std::path::PathBuf;

use thiserror::Error;

/// Failure of a durable preference read or write.
///
/// A failed mutation leaves the live stream on the last committed value;
/// the store never advances the stream before the durable write succeeds.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage I/O failed: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference serialization failed")]
    Serialize(#[from] serde_json::Error),
}
