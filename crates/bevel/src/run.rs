// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eventline::{debug, info};

use bevel_skin::{BorderSettings, BorderSkin, PixmapCanvas, config};

use crate::cli::{Args, CanvasArgs, Cmd, Overrides};
use crate::print;

pub fn run(args: Args) -> Result<(), String> {
    debug!("parsed args: {:?}", args.cmd);

    let config_path = args.config.unwrap_or_else(config::default_user_config_path);
    debug!("config: {}", config_path.display());

    match args.cmd {
        Cmd::Render {
            canvas,
            output,
            overrides,
        } => {
            let settings = load_settings(&config_path, &overrides)?;
            render(settings, canvas, &output)?;
            println!("saved to: {}", output.display());
            Ok(())
        }

        Cmd::Points {
            canvas,
            fans,
            overrides,
        } => {
            let settings = load_settings(&config_path, &overrides)?;
            let frames = bevel_skin::build_frames(&settings, canvas.width as f64, canvas.height as f64)
                .ok_or_else(|| format!("canvas {}x{} is too small for this border", canvas.width, canvas.height))?;
            let geom = bevel_skin::geometry(&frames);
            print::print_geometry(std::io::stdout().lock(), &geom, fans).map_err(|e| format!("{e}"))
        }

        Cmd::Config { overrides } => {
            let settings = load_settings(&config_path, &overrides)?;
            print::print_settings(std::io::stdout().lock(), &settings).map_err(|e| format!("{e}"))
        }
    }
}

fn load_settings(path: &Path, overrides: &Overrides) -> Result<BorderSettings, String> {
    let mut settings = config::load(path).map_err(|e| format!("{e}"))?;
    overrides.apply(&mut settings)?;
    Ok(settings)
}

fn render(settings: BorderSettings, canvas: CanvasArgs, output: &Path) -> Result<(), String> {
    info!("rendering {}x{} border", canvas.width, canvas.height);

    let mut pixmap = PixmapCanvas::new(canvas.width, canvas.height).map_err(|e| format!("{e}"))?;
    let mut skin = BorderSkin::new(settings);
    skin.repaint(&mut pixmap).map_err(|e| format!("{e}"))?;

    crate::paths::ensure_parent_dir(output).map_err(|e| format!("create output dir: {e}"))?;
    pixmap.save_png(output).map_err(|e| format!("{e}"))?;
    info!("wrote {}", output.display());
    Ok(())
}
