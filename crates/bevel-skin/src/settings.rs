// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use bevel_core::{Edge, Segments};

use crate::colour::Rgba;

/// Everything the border skin needs besides the canvas size.
///
/// Colours are passed through to the canvas untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSettings {
    /// Width of the middle band.
    pub thickness: f64,
    pub inner_thickness: f64,
    pub outer_thickness: f64,
    /// Fraction in [0, 1] scaling the outer gap shortening.
    pub border_radius: f64,

    /// Fill for every fan; opaque red when unset.
    pub color: Option<Rgba>,
    pub inner_outline_color: Option<Rgba>,
    pub outer_outline_color: Option<Rgba>,

    /// Gaps of the innermost frame; outer layers derive theirs from it.
    pub segments: Segments,

    /// Edges collapsed onto the innermost frame.
    pub hide_edges: Vec<Edge>,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            thickness: 16.0,
            inner_thickness: 8.0,
            outer_thickness: 8.0,
            border_radius: 0.3,
            color: None,
            inner_outline_color: None,
            outer_outline_color: None,
            segments: Segments {
                top: [80.0, 280.0],
                bottom: [280.0, 80.0],
                left: [80.0, 80.0],
                right: [80.0, 80.0],
            },
            hide_edges: Vec::new(),
        }
    }
}

impl BorderSettings {
    pub fn fill_colour(&self) -> Rgba {
        self.color.unwrap_or(Rgba::RED)
    }

    pub fn inner_outline_colour(&self) -> Rgba {
        self.inner_outline_color.unwrap_or(Rgba::BLACK)
    }

    pub fn outer_outline_colour(&self) -> Rgba {
        self.outer_outline_color.unwrap_or(Rgba::BLACK)
    }
}
