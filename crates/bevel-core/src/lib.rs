// Author: Dustin Pilgrim
// License: MIT

pub mod edge;
pub mod error;
pub mod fan;
pub mod frame;
pub mod point;
pub mod stack;
pub mod vector;

pub use edge::{Chamfers, Corner, Edge, Segments};
pub use error::GeometryError;
pub use fan::{Fan, add_chamfer, corner_fans, inner_outline, outer_outline, segment_fans};
pub use frame::{Bounds, Frame, OVERFLOW_PADDING};
pub use point::{FrameId, OUTLINE_LEN, OutlinePoint, PathPoint, positions};
pub use stack::FrameStack;
pub use vector::Vector;
