// Author: Dustin Pilgrim
// License: MIT

use std::sync::atomic::{AtomicU32, Ordering};

use crate::edge::{Chamfers, Corner, Edge, Segments};
use crate::point::{FrameId, OUTLINE_LEN, OutlinePoint};
use crate::vector::Vector;

/// Extra length removed on top of the worst overflow so gap points never
/// touch each other after correction.
pub const OVERFLOW_PADDING: f64 = 8.0;

static NEXT_FRAME_ID: AtomicU32 = AtomicU32::new(1);

fn next_frame_id() -> FrameId {
    FrameId(NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed))
}

/// Edge coordinates of a frame, centred at the origin unless edges were hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    fn centred(width: f64, height: f64) -> Self {
        Self {
            left: -width / 2.0,
            top: -height / 2.0,
            right: width / 2.0,
            bottom: height / 2.0,
        }
    }

    pub fn corner(&self, corner: Corner) -> Vector {
        match corner {
            Corner::LeftTop => Vector::new(self.left, self.top),
            Corner::RightTop => Vector::new(self.right, self.top),
            Corner::RightBottom => Vector::new(self.right, self.bottom),
            Corner::LeftBottom => Vector::new(self.left, self.bottom),
        }
    }
}

/// One rectangular border layer with per-edge gaps and per-corner chamfers.
///
/// The 12-point outline is recomputed eagerly by every mutator, so reading
/// [`Frame::points`] never observes stale geometry.
///
/// Cloning keeps the geometry (chamfers and hidden edges included) but hands
/// the clone a fresh identity, so a clone can sit in the same stack as its
/// source.
#[derive(Debug)]
pub struct Frame {
    id: FrameId,
    width: f64,
    height: f64,
    segments: Segments,
    chamfers: Chamfers,
    bounds: Bounds,
    points: [OutlinePoint; OUTLINE_LEN],
}

impl Frame {
    pub fn new(width: f64, height: f64, segments: Segments, chamfers: Chamfers) -> Self {
        let id = next_frame_id();
        let bounds = Bounds::centred(width, height);
        let points = build_outline(id, &bounds, &segments, &chamfers);
        Self {
            id,
            width,
            height,
            segments,
            chamfers,
            bounds,
            points,
        }
    }

    /// New frame with the same size and segments. Chamfers are not carried
    /// over; set them explicitly on the copy.
    pub fn copy(frame: &Frame) -> Self {
        Frame::new(frame.width, frame.height, frame.segments, Chamfers::default())
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn chamfers(&self) -> &Chamfers {
        &self.chamfers
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Nominal length of an edge: width for top/bottom, height for left/right.
    pub fn dimension(&self, edge: Edge) -> f64 {
        if edge.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.bounds = Bounds::centred(width, height);
        self.rebuild();
    }

    /// Inflate outward by `thickness` on every side. Every gap grows by the
    /// same amount so gap points stay aligned with the layer inside.
    pub fn grow(&mut self, thickness: f64) {
        for edge in Edge::ALL {
            let gap = self.segments.get_mut(edge);
            gap[0] += thickness;
            gap[1] += thickness;
        }
        self.resize(self.width + thickness * 2.0, self.height + thickness * 2.0);
    }

    pub fn set_chamfers(&mut self, chamfers: Chamfers) {
        self.chamfers = chamfers;
        self.rebuild();
    }

    pub fn set_segments(&mut self, segments: Segments) {
        self.segments = segments;
        self.rebuild();
    }

    /// Shorten every gap by `amount`, clamping each length at zero.
    pub fn inset_segments(&mut self, amount: f64) {
        for edge in Edge::ALL {
            let gap = self.segments.get_mut(edge);
            gap[0] = (gap[0] - amount).max(0.0);
            gap[1] = (gap[1] - amount).max(0.0);
        }
        self.rebuild();
    }

    /// Shrink overflowing gaps across a set of frames.
    ///
    /// An edge overflows when its two gaps sum to more than the frame's
    /// dimension along that edge. The worst overflow of an edge over all
    /// frames, plus [`OVERFLOW_PADDING`], is then removed from that edge on
    /// every frame, split in proportion to the two gap lengths.
    pub fn adjust_segments(frames: &mut [Frame]) {
        let mut excess = [0.0f64; 4];

        for frame in frames.iter() {
            for (i, edge) in Edge::ALL.iter().enumerate() {
                let [a, b] = frame.segments.get(*edge);
                let over = a + b - frame.dimension(*edge);
                if over > 0.0 && over > excess[i] {
                    excess[i] = over;
                }
            }
        }

        for (i, edge) in Edge::ALL.iter().enumerate() {
            if excess[i] <= 0.0 {
                continue;
            }
            let total = excess[i] + OVERFLOW_PADDING;
            eventline::debug!("adjusting {} segments by {:.2}", edge, total);

            for frame in frames.iter_mut() {
                let gap = frame.segments.get_mut(*edge);
                let sum = gap[0] + gap[1];
                if sum <= 0.0 {
                    continue;
                }
                let (a, b) = (gap[0], gap[1]);
                gap[0] = (a - total * a / sum).max(0.0);
                gap[1] = (b - total * b / sum).max(0.0);
            }
        }

        for frame in frames.iter_mut() {
            frame.rebuild();
        }
    }

    /// Collapse the named edges of every frame after the first onto the
    /// first frame's edges.
    pub fn hide_edges(frames: &mut [Frame], edges: &[Edge]) {
        let Some((first, rest)) = frames.split_first_mut() else {
            return;
        };
        if edges.is_empty() {
            return;
        }
        let anchor = first.bounds;

        for frame in rest {
            for edge in edges {
                match edge {
                    Edge::Left => frame.bounds.left = anchor.left,
                    Edge::Right => frame.bounds.right = anchor.right,
                    Edge::Top => frame.bounds.top = anchor.top,
                    Edge::Bottom => frame.bounds.bottom = anchor.bottom,
                }
            }
            frame.rebuild();
        }
    }

    /// The 12-point outline, clockwise from the left-top corner.
    pub fn points(&self) -> &[OutlinePoint; OUTLINE_LEN] {
        &self.points
    }

    pub fn point(&self, slot: usize) -> &OutlinePoint {
        &self.points[slot % OUTLINE_LEN]
    }

    pub fn corner(&self, corner: Corner) -> &OutlinePoint {
        &self.points[corner_slot(corner)]
    }

    pub fn prev(&self, p: &OutlinePoint) -> &OutlinePoint {
        &self.points[p.prev_slot()]
    }

    pub fn next(&self, p: &OutlinePoint) -> &OutlinePoint {
        &self.points[p.next_slot()]
    }

    /// Gap point on the edge arriving at `corner`.
    pub fn before(&self, corner: Corner) -> &OutlinePoint {
        self.prev(self.corner(corner))
    }

    /// Gap point on the edge leaving `corner`.
    pub fn after(&self, corner: Corner) -> &OutlinePoint {
        self.next(self.corner(corner))
    }

    fn rebuild(&mut self) {
        self.points = build_outline(self.id, &self.bounds, &self.segments, &self.chamfers);
    }
}

impl Clone for Frame {
    fn clone(&self) -> Self {
        let id = next_frame_id();
        Self {
            id,
            width: self.width,
            height: self.height,
            segments: self.segments,
            chamfers: self.chamfers,
            bounds: self.bounds,
            points: build_outline(id, &self.bounds, &self.segments, &self.chamfers),
        }
    }
}

pub(crate) fn corner_slot(corner: Corner) -> usize {
    corner.index() * 3
}

fn build_outline(
    id: FrameId,
    bounds: &Bounds,
    segments: &Segments,
    chamfers: &Chamfers,
) -> [OutlinePoint; OUTLINE_LEN] {
    let lt = bounds.corner(Corner::LeftTop);
    let rt = bounds.corner(Corner::RightTop);
    let rb = bounds.corner(Corner::RightBottom);
    let lb = bounds.corner(Corner::LeftBottom);

    let [top_a, top_b] = segments.top;
    let [right_a, right_b] = segments.right;
    let [bottom_a, bottom_b] = segments.bottom;
    let [left_a, left_b] = segments.left;

    let positions = [
        lt,
        lt + Vector::new(top_a, 0.0),
        rt - Vector::new(top_b, 0.0),
        rt,
        rt + Vector::new(0.0, right_a),
        rb - Vector::new(0.0, right_b),
        rb,
        rb - Vector::new(bottom_b, 0.0),
        lb + Vector::new(bottom_a, 0.0),
        lb,
        lb - Vector::new(0.0, left_b),
        lt + Vector::new(0.0, left_a),
    ];

    std::array::from_fn(|slot| {
        let corner = (slot % 3 == 0).then(|| Corner::ALL[slot / 3]);
        OutlinePoint {
            pos: positions[slot],
            frame: id,
            slot,
            corner,
            chamfer: corner.map(|c| chamfers.get(c)).unwrap_or(0.0),
        }
    })
}
