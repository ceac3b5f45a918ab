// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("unknown edge \"{0}\" (expected top|right|bottom|left)")]
    UnknownEdge(String),

    #[error("unknown corner \"{0}\" (expected leftTop|rightTop|rightBottom|leftBottom)")]
    UnknownCorner(String),
}
