// Host-level errors. Every variant states *where* things went wrong.
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// The starting board image could not be read or decoded
    #[error("board image error: {0}")]
    BoardImage(#[from] image::ImageError),

    /// Eraser configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}
