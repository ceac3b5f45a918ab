// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::error::GeometryError;

/// Rectangle edges in clockwise order starting at the top.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Corner this edge leaves when walking clockwise.
    pub fn start_corner(self) -> Corner {
        match self {
            Edge::Top => Corner::LeftTop,
            Edge::Right => Corner::RightTop,
            Edge::Bottom => Corner::RightBottom,
            Edge::Left => Corner::LeftBottom,
        }
    }

    /// Corner this edge arrives at when walking clockwise.
    pub fn end_corner(self) -> Corner {
        match self {
            Edge::Top => Corner::RightTop,
            Edge::Right => Corner::RightBottom,
            Edge::Bottom => Corner::LeftBottom,
            Edge::Left => Corner::LeftTop,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    pub fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Edge {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Edge::Top),
            "right" => Ok(Edge::Right),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            other => Err(GeometryError::UnknownEdge(other.to_string())),
        }
    }
}

/// Rectangle corners in clockwise order starting at the top left.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    LeftTop,
    RightTop,
    RightBottom,
    LeftBottom,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::LeftTop,
        Corner::RightTop,
        Corner::RightBottom,
        Corner::LeftBottom,
    ];

    pub fn index(self) -> usize {
        match self {
            Corner::LeftTop => 0,
            Corner::RightTop => 1,
            Corner::RightBottom => 2,
            Corner::LeftBottom => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Corner::LeftTop => "leftTop",
            Corner::RightTop => "rightTop",
            Corner::RightBottom => "rightBottom",
            Corner::LeftBottom => "leftBottom",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Corner {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "lefttop" => Ok(Corner::LeftTop),
            "righttop" => Ok(Corner::RightTop),
            "rightbottom" => Ok(Corner::RightBottom),
            "leftbottom" => Ok(Corner::LeftBottom),
            _ => Err(GeometryError::UnknownCorner(s.trim().to_string())),
        }
    }
}

/// Per-edge gap lengths `[a, b]`. `a` is measured inward from the left end of
/// a horizontal edge (top end of a vertical one), `b` from the opposite end.
/// Missing edges default to `[0, 0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segments {
    pub top: [f64; 2],
    pub right: [f64; 2],
    pub bottom: [f64; 2],
    pub left: [f64; 2],
}

impl Segments {
    pub fn get(&self, edge: Edge) -> [f64; 2] {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn get_mut(&mut self, edge: Edge) -> &mut [f64; 2] {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    pub fn with(mut self, edge: Edge, gap: [f64; 2]) -> Self {
        *self.get_mut(edge) = gap;
        self
    }

    /// Same gap pair on every edge.
    pub fn uniform(gap: [f64; 2]) -> Self {
        Self {
            top: gap,
            right: gap,
            bottom: gap,
            left: gap,
        }
    }
}

/// Chamfer cut lengths per corner. Missing corners default to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Chamfers {
    pub left_top: f64,
    pub right_top: f64,
    pub right_bottom: f64,
    pub left_bottom: f64,
}

impl Chamfers {
    pub fn uniform(size: f64) -> Self {
        Self {
            left_top: size,
            right_top: size,
            right_bottom: size,
            left_bottom: size,
        }
    }

    pub fn get(&self, corner: Corner) -> f64 {
        match corner {
            Corner::LeftTop => self.left_top,
            Corner::RightTop => self.right_top,
            Corner::RightBottom => self.right_bottom,
            Corner::LeftBottom => self.left_bottom,
        }
    }

    /// Build from `(corner, size)` pairs; corners not listed stay at `0`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Corner, f64)>,
    {
        let mut out = Self::default();
        for (corner, size) in pairs {
            match corner {
                Corner::LeftTop => out.left_top = size,
                Corner::RightTop => out.right_top = size,
                Corner::RightBottom => out.right_bottom = size,
                Corner::LeftBottom => out.left_bottom = size,
            }
        }
        out
    }
}
