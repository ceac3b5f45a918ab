// Author: Dustin Pilgrim
// License: MIT

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or direction in frame space (origin at the frame centre, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply_scalar(self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector normalizes to [`Vector::ZERO`]. Chamfer cuts toward
    /// a coincident neighbour therefore collapse onto the corner instead of
    /// producing NaN coordinates.
    pub fn normalize(self) -> Vector {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Vector::ZERO;
        }
        Vector::new(self.x / len, self.y / len)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.multiply_scalar(rhs)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -4.0);

        assert_eq!(a.add(b), Vector::new(4.0, -2.0));
        assert_eq!(a.subtract(b), Vector::new(-2.0, 6.0));
        assert_eq!(b.multiply_scalar(0.5), Vector::new(1.5, -2.0));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0));

        // operands untouched
        assert_eq!(a, Vector::new(1.0, 2.0));
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vector::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = Vector::ZERO.normalize();
        assert_eq!(n, Vector::ZERO);
        assert!(n.is_finite());
    }
}
