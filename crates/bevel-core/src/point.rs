// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::edge::Corner;
use crate::vector::Vector;

/// Number of points in a frame outline: four corners plus two gap points per edge.
pub const OUTLINE_LEN: usize = 12;

/// Identity of a [`Frame`](crate::Frame), unique per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(pub(crate) u32);

impl FrameId {
    pub fn get(self) -> u32 {
        self.0
    }
}

/// One entry of a frame's 12-point outline.
///
/// Neighbour links are implicit: `slot` indexes the owning frame's outline and
/// the previous/next points are `slot ∓ 1 (mod 12)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    pub pos: Vector,
    pub frame: FrameId,
    pub slot: usize,
    /// Set for the four corner slots (0, 3, 6, 9).
    pub corner: Option<Corner>,
    /// Chamfer cut length; zero for gap points.
    pub chamfer: f64,
}

impl OutlinePoint {
    pub fn is_corner(&self) -> bool {
        self.corner.is_some()
    }

    /// Corners are the only rounded points of an outline.
    pub fn is_rounded(&self) -> bool {
        self.corner.is_some()
    }

    pub fn prev_slot(&self) -> usize {
        (self.slot + OUTLINE_LEN - 1) % OUTLINE_LEN
    }

    pub fn next_slot(&self) -> usize {
        (self.slot + 1) % OUTLINE_LEN
    }
}

/// A point as it appears in a fan or assembled outline.
///
/// Points copied from a frame outline keep their owner and slot. Points created
/// by a chamfer cut have no owner; the first point of each cut remembers the
/// corner it replaced in `mid`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub pos: Vector,
    pub frame: Option<FrameId>,
    pub slot: Option<usize>,
    pub corner: bool,
    pub rounded: bool,
    pub chamfer: f64,
    pub mid: Option<Vector>,
}

impl PathPoint {
    pub(crate) fn cut(pos: Vector, from: &PathPoint, mid: Option<Vector>) -> Self {
        Self {
            pos,
            frame: None,
            slot: from.slot,
            corner: false,
            rounded: from.rounded,
            chamfer: 0.0,
            mid,
        }
    }

    pub fn is_owned_by(&self, id: FrameId) -> bool {
        self.frame == Some(id)
    }

    /// Same outline vertex of the same frame. Chamfer cut points are never
    /// the same vertex as anything else.
    pub fn same_vertex(&self, other: &PathPoint) -> bool {
        match (self.frame, other.frame) {
            (Some(a), Some(b)) => a == b && self.slot == other.slot,
            _ => false,
        }
    }
}

impl From<&OutlinePoint> for PathPoint {
    fn from(p: &OutlinePoint) -> Self {
        Self {
            pos: p.pos,
            frame: Some(p.frame),
            slot: Some(p.slot),
            corner: p.is_corner(),
            rounded: p.is_rounded(),
            chamfer: p.chamfer,
            mid: None,
        }
    }
}

impl From<OutlinePoint> for PathPoint {
    fn from(p: OutlinePoint) -> Self {
        PathPoint::from(&p)
    }
}

/// Positions only, for handing a path to a renderer.
pub fn positions(points: &[PathPoint]) -> Vec<Vector> {
    points.iter().map(|p| p.pos).collect()
}
