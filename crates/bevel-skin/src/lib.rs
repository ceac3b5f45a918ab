// Author: Dustin Pilgrim
// License: MIT

pub mod canvas;
pub mod colour;
pub mod config;
pub mod error;
pub mod settings;
pub mod skin;

pub use canvas::{Canvas, PixmapCanvas};
pub use colour::Rgba;
pub use error::{Result, SkinError};
pub use settings::BorderSettings;
pub use skin::{BorderGeometry, BorderSkin, OUTLINE_WIDTH, build_frames, geometry};
