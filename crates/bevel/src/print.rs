// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, Write};

use bevel_core::PathPoint;
use bevel_skin::{BorderGeometry, BorderSettings, Rgba};

pub fn print_settings<W: Write>(mut w: W, s: &BorderSettings) -> io::Result<()> {
    writeln!(w, "thickness: {}", s.thickness)?;
    writeln!(w, "inner_thickness: {}", s.inner_thickness)?;
    writeln!(w, "outer_thickness: {}", s.outer_thickness)?;
    writeln!(w, "border_radius: {}", s.border_radius)?;
    writeln!(w, "color: {}", colour_or_default(s.color))?;
    writeln!(w, "inner_outline_color: {}", colour_or_default(s.inner_outline_color))?;
    writeln!(w, "outer_outline_color: {}", colour_or_default(s.outer_outline_color))?;

    let seg = &s.segments;
    writeln!(
        w,
        "segments: top {:?} right {:?} bottom {:?} left {:?}",
        seg.top, seg.right, seg.bottom, seg.left
    )?;

    if s.hide_edges.is_empty() {
        writeln!(w, "hide_edges: none")?;
    } else {
        let names: Vec<&str> = s.hide_edges.iter().map(|e| e.name()).collect();
        writeln!(w, "hide_edges: {}", names.join(", "))?;
    }
    Ok(())
}

pub fn print_geometry<W: Write>(mut w: W, geom: &BorderGeometry, fans: bool) -> io::Result<()> {
    print_path(&mut w, "outer", &geom.outer)?;
    print_path(&mut w, "inner", &geom.inner)?;

    if fans {
        for (i, fan) in geom.corners.iter().enumerate() {
            print_path(&mut w, &format!("corner[{i}]"), fan)?;
        }
        for (i, fan) in geom.segments.iter().enumerate() {
            print_path(&mut w, &format!("segment[{i}]"), fan)?;
        }
    }
    Ok(())
}

fn print_path<W: Write>(w: &mut W, label: &str, path: &[PathPoint]) -> io::Result<()> {
    writeln!(w, "{label}: {} points", path.len())?;
    for p in path {
        let tag = if p.frame.is_none() {
            " (cut)"
        } else if p.corner {
            " (corner)"
        } else {
            ""
        };
        writeln!(w, "  {:.2}, {:.2}{tag}", p.pos.x, p.pos.y)?;
    }
    Ok(())
}

fn colour_or_default(c: Option<Rgba>) -> String {
    match c {
        Some(c) => format!("0x{:08X}", c.to_argb()),
        None => "(default)".to_string(),
    }
}
