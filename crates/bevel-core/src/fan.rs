// Author: Dustin Pilgrim
// License: MIT

//! Fans stitch points of two or three nested frames into small closed paths:
//! one per corner and one per edge gap. The two composite outlines are
//! assembled from them.

use crate::edge::{Corner, Edge};
use crate::frame::Frame;
use crate::point::PathPoint;
use crate::stack::FrameStack;

/// An ordered, implicitly closed point sequence.
pub type Fan = Vec<PathPoint>;

/// One quadrilateral per edge (top, right, bottom, left) bridging the gap
/// break between `first` and the frame after it.
pub fn segment_fans(frames: &FrameStack<'_>) -> [Fan; 4] {
    let a = frames.first;
    let b = frames.second();

    Edge::ALL.map(|edge| {
        let start = edge.start_corner();
        let end = edge.end_corner();
        let fan: Fan = vec![
            a.after(start).into(),
            a.before(end).into(),
            b.before(end).into(),
            b.after(start).into(),
        ];
        fan
    })
}

/// One fan per corner (left-top, right-top, right-bottom, left-bottom)
/// tracing how the stacked frames meet there. With `rounded` set the
/// boundary frames' corners are cut by their chamfer length.
pub fn corner_fans(frames: &FrameStack<'_>, rounded: bool) -> [Fan; 4] {
    let fans = Corner::ALL.map(|corner| corner_fan(frames, corner));
    if !rounded {
        return fans;
    }
    fans.map(|fan| add_chamfer(&fan, frames))
}

fn corner_fan(frames: &FrameStack<'_>, corner: Corner) -> Fan {
    let a = frames.first;
    let b = frames.second();

    let mut points: Fan = vec![
        b.before(corner).into(),
        a.before(corner).into(),
        a.corner(corner).into(),
        a.after(corner).into(),
        b.after(corner).into(),
    ];

    match frames.third() {
        Some(c) => {
            points.push(c.after(corner).into());
            points.push(c.corner(corner).into());
            points.push(c.before(corner).into());
        }
        None => points.push(b.corner(corner).into()),
    }
    points
}

/// Replace each boundary-frame corner in `points` with a chamfer cut.
///
/// Neighbours are taken from `points` itself treated as a cycle, not from the
/// owning frame's outline. The cut's first point records the replaced corner
/// as its `mid`. Corners of the middle frame pass through unchanged.
pub fn add_chamfer(points: &[PathPoint], frames: &FrameStack<'_>) -> Fan {
    let n = points.len();
    let mut out = Vec::with_capacity(n + 4);

    for (i, p) in points.iter().enumerate() {
        let eligible = p.corner && p.frame.is_some_and(|id| frames.is_boundary(id));
        if !eligible {
            out.push(*p);
            continue;
        }

        let prev = &points[(i + n - 1) % n];
        let next = &points[(i + 1) % n];

        let toward_prev = prev.pos.subtract(p.pos).normalize().multiply_scalar(p.chamfer).add(p.pos);
        let toward_next = next.pos.subtract(p.pos).normalize().multiply_scalar(p.chamfer).add(p.pos);

        let mid = p.rounded.then_some(p.pos);
        out.push(PathPoint::cut(toward_prev, p, mid));
        out.push(PathPoint::cut(toward_next, p, None));
    }

    out
}

/// Composite silhouette of the stacked frames.
///
/// Corner and segment fans are interleaved (corner 0, segment 0, corner 1,
/// ...). Each fan contributes its points up to, not including, the first one
/// owned by `frames.first`. A point repeating the previously emitted vertex is
/// dropped, as is a final point repeating the first.
pub fn outer_outline(corners: &[Fan; 4], segments: &[Fan; 4], frames: &FrameStack<'_>) -> Fan {
    let stop = frames.first.id();
    let mut out: Fan = Vec::new();

    for i in 0..4 {
        for fan in [&corners[i], &segments[i]] {
            for p in fan.iter() {
                if p.is_owned_by(stop) {
                    break;
                }
                if out.last().is_some_and(|last| last.same_vertex(p)) {
                    continue;
                }
                out.push(*p);
            }
        }
    }

    if out.len() > 1 && out[0].same_vertex(&out[out.len() - 1]) {
        out.pop();
    }
    out
}

/// The frame's own outline with every corner chamfered.
pub fn inner_outline(frame: &Frame) -> Fan {
    let points: Fan = frame.points().iter().map(PathPoint::from).collect();
    add_chamfer(&points, &FrameStack::single(frame))
}
