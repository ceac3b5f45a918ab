// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::{Path, PathBuf};

use rune_cfg::RuneConfig;

use bevel_core::Edge;

use crate::colour::Rgba;
use crate::error::{Result, SkinError};
use crate::settings::BorderSettings;

/// Load settings from `path`, or defaults when the file does not exist.
pub fn load(path: &Path) -> Result<BorderSettings> {
    if !path.exists() {
        eventline::debug!("no config at {}, using defaults", path.display());
        return Ok(BorderSettings::default());
    }

    let rc = RuneConfig::from_file(path)
        .map_err(|e| SkinError::Config(format!("failed to read config: {e}")))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<BorderSettings> {
    let mut cfg = BorderSettings::default();

    if !rc.has("bevel") {
        return Ok(cfg);
    }

    for (key, slot) in [
        ("bevel.thickness", &mut cfg.thickness),
        ("bevel.inner_thickness", &mut cfg.inner_thickness),
        ("bevel.outer_thickness", &mut cfg.outer_thickness),
        ("bevel.border_radius", &mut cfg.border_radius),
    ] {
        if let Some(v) = number(rc, key)? {
            if v < 0.0 {
                return Err(SkinError::Config(format!(
                    "config error at {key}: expected a non-negative number, got {v}"
                )));
            }
            *slot = v;
        }
    }
    cfg.border_radius = cfg.border_radius.clamp(0.0, 1.0);

    cfg.color = colour(rc, "bevel.color")?.or(cfg.color);
    cfg.inner_outline_color = colour(rc, "bevel.inner_outline_color")?.or(cfg.inner_outline_color);
    cfg.outer_outline_color = colour(rc, "bevel.outer_outline_color")?.or(cfg.outer_outline_color);

    // segments.<edge>.from_start / segments.<edge>.from_end
    // (`end` closes a rune block, so it cannot be a key)
    for edge in Edge::ALL {
        let gap = cfg.segments.get_mut(edge);
        for (i, side) in ["from_start", "from_end"].iter().enumerate() {
            let key = format!("bevel.segments.{edge}.{side}");
            if let Some(v) = number(rc, &key)? {
                gap[i] = v.max(0.0);
            }
        }
    }

    // hide_edges: "left, bottom"
    if let Some(list) = rc
        .get_optional::<String>("bevel.hide_edges")
        .map_err(|e| SkinError::Config(format!("config error at bevel.hide_edges: {e}")))?
    {
        cfg.hide_edges = parse_edges(&list)
            .map_err(|e| SkinError::Config(format!("config error at bevel.hide_edges: {e}")))?;
    }

    Ok(cfg)
}

fn number(rc: &RuneConfig, key: &str) -> Result<Option<f64>> {
    rc.get_optional::<f64>(key)
        .map_err(|e| SkinError::Config(format!("config error at {key}: {e}")))
}

fn colour(rc: &RuneConfig, key: &str) -> Result<Option<Rgba>> {
    let Some(s) = rc
        .get_optional::<String>(key)
        .map_err(|e| SkinError::Config(format!("config error at {key}: {e}")))?
    else {
        return Ok(None);
    };

    Rgba::parse_hex(&s)
        .map(Some)
        .map_err(|e| SkinError::Config(format!("config error at {key}: {e}")))
}

pub fn parse_edges(list: &str) -> std::result::Result<Vec<Edge>, bevel_core::GeometryError> {
    let mut edges = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let edge: Edge = name.parse()?;
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }
    Ok(edges)
}

pub fn default_user_config_path() -> PathBuf {
    let dir: PathBuf = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    };

    dir.join("bevel").join("bevel.rune")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn load_str(body: &str) -> Result<BorderSettings> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bevel.rune");
        fs::write(&path, body).unwrap();
        load(&path)
    }

    #[test]
    fn reads_a_full_config() {
        let cfg = load_str(
            r##"
bevel:
  thickness 12
  inner_thickness 6.5
  outer_thickness 4
  border_radius 0.5
  color "#102030"
  outer_outline_color "#ffffff80"
  hide_edges "left, bottom"

  segments:
    top:
      from_start 10
      from_end 20
    end
    left:
      from_end 0
    end
  end
end
"##,
        )
        .unwrap();

        assert_eq!(cfg.thickness, 12.0);
        assert_eq!(cfg.inner_thickness, 6.5);
        assert_eq!(cfg.outer_thickness, 4.0);
        assert_eq!(cfg.border_radius, 0.5);

        assert_eq!(cfg.color, Some(Rgba::parse_hex("#102030").unwrap()));
        assert_eq!(cfg.outer_outline_color, Some(Rgba::parse_hex("#ffffff80").unwrap()));
        assert_eq!(cfg.inner_outline_color, None);

        assert_eq!(cfg.segments.get(Edge::Top), [10.0, 20.0]);
        assert_eq!(cfg.segments.get(Edge::Left), [80.0, 0.0]);
        // untouched edges keep their defaults
        assert_eq!(cfg.segments.get(Edge::Bottom), BorderSettings::default().segments.get(Edge::Bottom));

        assert_eq!(cfg.hide_edges, vec![Edge::Left, Edge::Bottom]);
    }

    #[test]
    fn file_without_bevel_block_gives_defaults() {
        let cfg = load_str("other:\n  thickness 3\nend\n").unwrap();
        assert_eq!(cfg, BorderSettings::default());
    }

    #[test]
    fn border_radius_is_clamped_to_unit_range() {
        let cfg = load_str("bevel:\n  border_radius 2\nend\n").unwrap();
        assert_eq!(cfg.border_radius, 1.0);
    }

    #[test]
    fn negative_thickness_is_rejected() {
        let err = load_str("bevel:\n  thickness -4\nend\n").unwrap_err();
        assert!(matches!(err, SkinError::Config(_)), "{err:?}");
    }

    #[test]
    fn wrong_value_type_is_a_config_error() {
        let err = load_str("bevel:\n  thickness \"wide\"\nend\n").unwrap_err();
        assert!(matches!(err, SkinError::Config(ref m) if m.contains("bevel.thickness")), "{err:?}");
    }

    #[test]
    fn unknown_hidden_edge_is_a_config_error() {
        let err = load_str("bevel:\n  hide_edges \"left, middle\"\nend\n").unwrap_err();
        assert!(matches!(err, SkinError::Config(ref m) if m.contains("hide_edges")), "{err:?}");
    }

    #[test]
    fn malformed_colour_is_a_config_error() {
        let err = load_str("bevel:\n  color \"#12\"\nend\n").unwrap_err();
        assert!(matches!(err, SkinError::Config(ref m) if m.contains("bevel.color")), "{err:?}");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("absent.rune")).unwrap();
        assert_eq!(cfg, BorderSettings::default());
    }

    #[test]
    fn edge_lists_parse_and_dedupe() {
        assert_eq!(
            parse_edges("left, Bottom,left").unwrap(),
            vec![Edge::Left, Edge::Bottom]
        );
        assert!(parse_edges("").unwrap().is_empty());
        assert!(parse_edges("left, middle").is_err());
    }

    #[test]
    fn config_path_lives_under_bevel() {
        let p = default_user_config_path();
        assert!(p.ends_with("bevel/bevel.rune"));
    }
}
