// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bevel_core::Edge;
use bevel_skin::{BorderSettings, Rgba};

#[derive(Debug, Parser)]
#[command(name = "bevel", version, about = "Bevel — layered window border geometry.")]
pub struct Args {
    /// Override config path (default: $XDG_CONFIG_HOME/bevel/bevel.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/bevel/bevel.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Rasterise the border into a PNG
    Render {
        #[command(flatten)]
        canvas: CanvasArgs,

        /// Output file
        #[arg(long, short = 'o', default_value = "border.png")]
        output: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the computed outlines and fans
    Points {
        #[command(flatten)]
        canvas: CanvasArgs,

        /// Also print every corner and segment fan
        #[arg(long)]
        fans: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Show the effective settings
    Config {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct CanvasArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

/// Per-run overrides layered over the config file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    #[arg(long)]
    pub thickness: Option<f64>,

    #[arg(long)]
    pub inner_thickness: Option<f64>,

    #[arg(long)]
    pub outer_thickness: Option<f64>,

    /// Fraction in [0, 1]
    #[arg(long)]
    pub border_radius: Option<f64>,

    /// Fill colour (#RRGGBB or #RRGGBBAA)
    #[arg(long)]
    pub color: Option<String>,

    /// Collapse an edge onto the innermost frame (repeatable)
    #[arg(long = "hide-edge", value_enum)]
    pub hide_edges: Vec<Edge>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut BorderSettings) -> Result<(), String> {
        if let Some(v) = self.thickness {
            settings.thickness = v;
        }
        if let Some(v) = self.inner_thickness {
            settings.inner_thickness = v;
        }
        if let Some(v) = self.outer_thickness {
            settings.outer_thickness = v;
        }
        if let Some(v) = self.border_radius {
            settings.border_radius = v.clamp(0.0, 1.0);
        }
        if let Some(c) = &self.color {
            settings.color = Some(Rgba::parse_hex(c).map_err(|e| format!("--color: {e}"))?);
        }
        for edge in &self.hide_edges {
            if !settings.hide_edges.contains(edge) {
                settings.hide_edges.push(*edge);
            }
        }
        Ok(())
    }
}
