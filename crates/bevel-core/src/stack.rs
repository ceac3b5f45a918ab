// Author: Dustin Pilgrim
// License: MIT

use crate::frame::Frame;
use crate::point::FrameId;

/// An ordered set of one to three nested frames handed to the fan builders.
///
/// `first` leads every fan and `last` closes it; `middle` is optional and is
/// never chamfered. Nothing forces `first` to be the innermost layer: the
/// border skin builds its corner fans outermost-first and its segment fans
/// middle-then-inner.
#[derive(Debug, Clone, Copy)]
pub struct FrameStack<'a> {
    pub first: &'a Frame,
    pub middle: Option<&'a Frame>,
    pub last: &'a Frame,
}

impl<'a> FrameStack<'a> {
    pub fn single(frame: &'a Frame) -> Self {
        Self {
            first: frame,
            middle: None,
            last: frame,
        }
    }

    pub fn pair(first: &'a Frame, last: &'a Frame) -> Self {
        Self {
            first,
            middle: None,
            last,
        }
    }

    pub fn triple(first: &'a Frame, middle: &'a Frame, last: &'a Frame) -> Self {
        Self {
            first,
            middle: Some(middle),
            last,
        }
    }

    /// The frame right after `first`: the middle frame when present.
    pub fn second(&self) -> &'a Frame {
        self.middle.unwrap_or(self.last)
    }

    /// The closing frame of a three-frame stack.
    pub fn third(&self) -> Option<&'a Frame> {
        self.middle.map(|_| self.last)
    }

    /// True for the two boundary frames, the only ones that get chamfered.
    pub fn is_boundary(&self, id: FrameId) -> bool {
        self.first.id() == id || self.last.id() == id
    }
}
