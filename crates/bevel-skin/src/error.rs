// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkinError>;

#[derive(Debug, Error)]
pub enum SkinError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid colour: {0}")]
    InvalidColour(String),

    #[error("pixmap allocation failed ({width}x{height})")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("path needs at least two points")]
    EmptyPath,

    #[error("png encoding failed: {0}")]
    Png(String),
}
