// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use bevel_core::Vector;

use crate::colour::Rgba;
use crate::error::{Result, SkinError};

/// Drawing surface the border is painted onto.
///
/// Points arrive in frame space (origin at the canvas centre); the canvas
/// owns the translation to its own pixel space.
pub trait Canvas {
    /// Current surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Clear every pixel to transparent.
    fn clear(&mut self);

    /// Draw `points` as a closed polyline. `width == 0` fills the polygon,
    /// anything larger strokes it with round caps.
    fn draw_polyline(&mut self, points: &[Vector], colour: Rgba, width: f64) -> Result<()>;
}

/// tiny-skia backed canvas.
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(SkinError::PixmapAlloc { width, height })?;
        Ok(Self { pixmap })
    }

    /// Premultiplied alpha of the pixel at `(x, y)`; `None` when out of range.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| SkinError::Png(e.to_string()))
    }

    fn centre(&self) -> Transform {
        Transform::from_translate(self.pixmap.width() as f32 / 2.0, self.pixmap.height() as f32 / 2.0)
    }
}

impl Canvas for PixmapCanvas {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn draw_polyline(&mut self, points: &[Vector], colour: Rgba, width: f64) -> Result<()> {
        let path = closed_path(points)?;

        let mut paint = Paint::default();
        paint.set_color(colour.to_skia());
        paint.anti_alias = true;

        let transform = self.centre();
        if width > 0.0 {
            let stroke = Stroke {
                width: width as f32,
                line_cap: LineCap::Round,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        } else {
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
        Ok(())
    }
}

fn closed_path(points: &[Vector]) -> Result<tiny_skia::Path> {
    let (first, rest) = points.split_first().ok_or(SkinError::EmptyPath)?;
    if rest.is_empty() {
        return Err(SkinError::EmptyPath);
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();

    // tiny-skia refuses zero-area paths
    pb.finish().ok_or(SkinError::EmptyPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(half: f64) -> Vec<Vector> {
        vec![
            Vector::new(-half, -half),
            Vector::new(half, -half),
            Vector::new(half, half),
            Vector::new(-half, half),
        ]
    }

    #[test]
    fn fill_paints_around_the_centre() {
        let mut canvas = PixmapCanvas::new(40, 40).unwrap();
        canvas.clear();
        canvas.draw_polyline(&square(10.0), Rgba::BLACK, 0.0).unwrap();

        assert_eq!(canvas.alpha_at(20, 20), Some(255));
        assert_eq!(canvas.alpha_at(2, 2), Some(0));
    }

    #[test]
    fn stroke_leaves_interior_empty() {
        let mut canvas = PixmapCanvas::new(40, 40).unwrap();
        canvas.draw_polyline(&square(10.0), Rgba::BLACK, 2.0).unwrap();

        assert_eq!(canvas.alpha_at(20, 20), Some(0));
        assert!(canvas.alpha_at(10, 20).unwrap() > 0);
    }

    #[test]
    fn rejects_degenerate_paths() {
        let mut canvas = PixmapCanvas::new(8, 8).unwrap();
        assert!(matches!(
            canvas.draw_polyline(&[], Rgba::BLACK, 0.0),
            Err(SkinError::EmptyPath)
        ));
        assert!(matches!(
            canvas.draw_polyline(&[Vector::ZERO], Rgba::BLACK, 0.0),
            Err(SkinError::EmptyPath)
        ));
    }

    #[test]
    fn zero_sized_pixmap_fails() {
        assert!(matches!(
            PixmapCanvas::new(0, 10),
            Err(SkinError::PixmapAlloc { width: 0, height: 10 })
        ));
    }
}
