// Author: Dustin Pilgrim
// License: MIT

use bevel_core::{
    Chamfers, Fan, Frame, FrameStack, corner_fans, inner_outline, outer_outline, positions,
    segment_fans,
};

use crate::canvas::Canvas;
use crate::colour::Rgba;
use crate::error::{Result, SkinError};
use crate::settings::BorderSettings;

/// Width of the two outline strokes.
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Extra chamfer on top of the inner thickness.
const CHAMFER_EXTRA: f64 = 4.0;

/// All paths of one repaint, in frame space.
#[derive(Debug, Clone)]
pub struct BorderGeometry {
    pub corners: [Fan; 4],
    pub segments: [Fan; 4],
    pub outer: Fan,
    pub inner: Fan,
}

/// Builds the inner, middle and outer frame for a canvas of `width` x `height`.
///
/// The inner frame sits one and a half thicknesses inside the canvas edge.
/// The middle frame grows it by the inner thickness. The outer frame starts
/// from the middle one with its gaps shortened by the radius-scaled
/// thickness, then grows by the outer thickness. Overflowing gaps are
/// corrected across all three before any edges are hidden.
///
/// Returns `None` when the canvas is too small to host the inner frame.
pub fn build_frames(settings: &BorderSettings, width: f64, height: f64) -> Option<[Frame; 3]> {
    let thickness = settings.thickness;
    let inset = (thickness + thickness / 2.0) * 2.0;
    let (w, h) = (width - inset, height - inset);
    if w <= 0.0 || h <= 0.0 {
        eventline::debug!("canvas {}x{} too small for thickness {}", width, height, thickness);
        return None;
    }

    let chamfers = Chamfers::uniform(settings.inner_thickness + CHAMFER_EXTRA);

    let inner = Frame::new(w, h, settings.segments, chamfers);

    let mut middle = Frame::copy(&inner);
    middle.grow(settings.inner_thickness);

    let mut outer = Frame::copy(&middle);
    outer.set_chamfers(chamfers);
    outer.inset_segments(thickness * 0.5 + thickness * settings.border_radius);
    outer.grow(settings.outer_thickness);

    let mut frames = [inner, middle, outer];
    Frame::adjust_segments(&mut frames);
    Frame::hide_edges(&mut frames, &settings.hide_edges);
    Some(frames)
}

/// Fans and outlines for a frame triple built by [`build_frames`].
pub fn geometry(frames: &[Frame; 3]) -> BorderGeometry {
    let [inner, middle, outer] = frames;

    let corners = corner_fans(&FrameStack::triple(outer, middle, inner), true);
    let segments = segment_fans(&FrameStack::pair(middle, inner));
    let outer_path = outer_outline(&corners, &segments, &FrameStack::triple(inner, middle, outer));
    let inner_path = inner_outline(inner);

    BorderGeometry {
        corners,
        segments,
        outer: outer_path,
        inner: inner_path,
    }
}

/// A decorative border drawn around a surface.
///
/// The host calls [`BorderSkin::redraw`] whenever something changed and
/// [`BorderSkin::repaint`] when it is ready to paint. Nothing is kept
/// between repaints besides the settings.
#[derive(Debug, Clone)]
pub struct BorderSkin {
    settings: BorderSettings,
    dirty: bool,
}

impl BorderSkin {
    pub fn new(settings: BorderSettings) -> Self {
        Self {
            settings,
            dirty: true,
        }
    }

    pub fn settings(&self) -> &BorderSettings {
        &self.settings
    }

    /// Mark the surface dirty; the next repaint redraws it.
    pub fn redraw(&mut self) {
        self.dirty = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// Paint the border if a redraw was requested. Returns whether anything
    /// was painted.
    pub fn repaint<C: Canvas>(&mut self, canvas: &mut C) -> Result<bool> {
        if !self.dirty {
            eventline::debug!("repaint skipped: nothing queued");
            return Ok(false);
        }
        self.dirty = false;
        self.paint(canvas)?;
        Ok(true)
    }

    /// Unconditionally clear and paint the border onto `canvas`.
    pub fn paint<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        canvas.clear();

        let (width, height) = canvas.size();
        let Some(frames) = build_frames(&self.settings, width as f64, height as f64) else {
            return Ok(());
        };
        let geom = geometry(&frames);

        let fill = self.settings.fill_colour();
        for fan in geom.corners.iter().chain(geom.segments.iter()) {
            draw(canvas, fan, fill, 0.0)?;
        }

        let outer = self.settings.outer_outline_colour();
        draw(canvas, &geom.outer, outer, OUTLINE_WIDTH)?;

        let inner = self.settings.inner_outline_colour();
        draw(canvas, &geom.inner, inner, OUTLINE_WIDTH)?;

        Ok(())
    }
}

impl Default for BorderSkin {
    fn default() -> Self {
        BorderSkin::new(BorderSettings::default())
    }
}

// Collapsed fans (e.g. hidden edges) have nothing to paint; skip them.
fn draw<C: Canvas>(canvas: &mut C, fan: &Fan, colour: Rgba, width: f64) -> Result<()> {
    let pts = positions(fan);
    match canvas.draw_polyline(&pts, colour, width) {
        Err(SkinError::EmptyPath) => {
            eventline::debug!("skipping degenerate path of {} points", pts.len());
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixmapCanvas;
    use bevel_core::{Corner, Edge, PathPoint, Vector};

    #[derive(Default)]
    struct RecordingCanvas {
        size: (u32, u32),
        clears: usize,
        calls: Vec<(Vec<Vector>, Rgba, f64)>,
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (u32, u32) {
            self.size
        }

        fn clear(&mut self) {
            self.clears += 1;
        }

        fn draw_polyline(&mut self, points: &[Vector], colour: Rgba, width: f64) -> Result<()> {
            self.calls.push((points.to_vec(), colour, width));
            Ok(())
        }
    }

    fn example_settings() -> BorderSettings {
        BorderSettings {
            thickness: 16.0,
            inner_thickness: 8.0,
            outer_thickness: 8.0,
            border_radius: 0.3,
            ..BorderSettings::default()
        }
    }

    fn assert_closed_path(path: &[PathPoint]) {
        assert!(!path.is_empty());
        let n = path.len();
        for (i, p) in path.iter().enumerate() {
            assert!(p.pos.is_finite(), "NaN at {i}");
            assert!(!p.same_vertex(&path[(i + 1) % n]), "repeated vertex at {i}");
        }
    }

    #[test]
    fn recipe_produces_two_clean_outlines() {
        let frames = build_frames(&example_settings(), 800.0, 600.0).unwrap();
        let geom = geometry(&frames);

        assert_closed_path(&geom.outer);
        assert_closed_path(&geom.inner);
        for fan in geom.corners.iter().chain(geom.segments.iter()) {
            assert_closed_path(fan);
        }
    }

    #[test]
    fn recipe_survives_overflowing_gaps() {
        // default gaps (80 + 280) exceed the inner width here
        let frames = build_frames(&example_settings(), 300.0, 200.0).unwrap();
        for f in &frames {
            for edge in Edge::ALL {
                let [a, b] = f.segments().get(edge);
                assert!(a >= 0.0 && b >= 0.0);
                assert!(a + b <= f.dimension(edge) + 1e-9);
            }
        }

        let geom = geometry(&frames);
        assert_closed_path(&geom.outer);
        assert_closed_path(&geom.inner);
    }

    #[test]
    fn recipe_layers_frames_outward() {
        let frames = build_frames(&example_settings(), 800.0, 600.0).unwrap();
        let [inner, middle, outer] = &frames;

        // 800 - 48 = 752, then +16 per growth
        assert_eq!(inner.width(), 752.0);
        assert_eq!(middle.width(), 768.0);
        assert_eq!(outer.width(), 784.0);

        assert_eq!(inner.corner(Corner::LeftTop).chamfer, 12.0);
        assert_eq!(middle.corner(Corner::LeftTop).chamfer, 0.0);
        assert_eq!(outer.corner(Corner::LeftTop).chamfer, 12.0);

        // outer gaps: middle's (left 88) shortened by 16 * 0.8, grown by 8
        let [a, _] = outer.segments().get(Edge::Left);
        assert!((a - (88.0 - 12.8 + 8.0)).abs() < 1e-9);
    }

    #[test]
    fn tiny_canvas_builds_nothing() {
        assert!(build_frames(&example_settings(), 40.0, 40.0).is_none());

        let mut skin = BorderSkin::new(example_settings());
        let mut canvas = RecordingCanvas {
            size: (40, 40),
            ..RecordingCanvas::default()
        };
        assert!(skin.repaint(&mut canvas).unwrap());
        assert_eq!(canvas.clears, 1);
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn repaint_issues_fills_then_outlines() {
        let settings = BorderSettings {
            color: Some(Rgba::new(0.2, 0.4, 0.6, 1.0)),
            outer_outline_color: Some(Rgba::new(1.0, 1.0, 1.0, 1.0)),
            ..example_settings()
        };
        let mut skin = BorderSkin::new(settings.clone());
        let mut canvas = RecordingCanvas {
            size: (800, 600),
            ..RecordingCanvas::default()
        };

        assert!(skin.repaint(&mut canvas).unwrap());
        assert_eq!(canvas.calls.len(), 10);

        for (_, colour, width) in &canvas.calls[..8] {
            assert_eq!(*colour, settings.color.unwrap());
            assert_eq!(*width, 0.0);
        }
        assert_eq!(canvas.calls[8].1, Rgba::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(canvas.calls[8].2, OUTLINE_WIDTH);
        // unset inner outline colour falls back to black
        assert_eq!(canvas.calls[9].1, Rgba::BLACK);
        assert_eq!(canvas.calls[9].2, OUTLINE_WIDTH);
    }

    #[test]
    fn repaint_only_after_redraw() {
        let mut skin = BorderSkin::default();
        let mut canvas = RecordingCanvas {
            size: (800, 600),
            ..RecordingCanvas::default()
        };

        assert!(skin.needs_repaint());
        assert!(skin.repaint(&mut canvas).unwrap());
        assert!(!skin.needs_repaint());
        assert!(!skin.repaint(&mut canvas).unwrap());
        assert_eq!(canvas.clears, 1);

        skin.redraw();
        assert!(skin.repaint(&mut canvas).unwrap());
        assert_eq!(canvas.clears, 2);
    }

    #[test]
    fn unset_fill_colour_is_red() {
        assert_eq!(BorderSettings::default().fill_colour(), Rgba::RED);
    }

    #[test]
    fn hidden_edge_keeps_paths_finite() {
        let settings = BorderSettings {
            hide_edges: vec![Edge::Left],
            ..example_settings()
        };
        let frames = build_frames(&settings, 800.0, 600.0).unwrap();
        let [inner, middle, outer] = &frames;
        assert_eq!(middle.bounds().left, inner.bounds().left);
        assert_eq!(outer.bounds().left, inner.bounds().left);

        let geom = geometry(&frames);
        assert!(geom.outer.iter().all(|p| p.pos.is_finite()));
    }

    #[test]
    fn paints_pixels_on_a_pixmap() {
        let skin = BorderSkin::new(BorderSettings {
            color: Some(Rgba::BLACK),
            ..example_settings()
        });
        let mut canvas = PixmapCanvas::new(400, 300).unwrap();
        skin.paint(&mut canvas).unwrap();

        // corner region carries the border, the centre stays clear
        assert_eq!(canvas.alpha_at(200, 150), Some(0));
        assert!(canvas.alpha_at(16, 16).unwrap() > 0);
    }
}
