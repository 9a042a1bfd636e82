use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use graphview::config::{self, ConfigError, GraphConfig};
use graphview::geom::{Point, Size, ViewRect};
use graphview::render;
use graphview::scene::{Scene, SceneError};
use graphview::surface::{RecordingSurface, SurfaceError};
use graphview::viewport::Viewport;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("failed to encode draw commands: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "graphview", about = "Render a 2D scene through a pan/zoom viewport and print the draw calls")]
struct Cli {
    /// Scene JSON file; the demo scene is used when absent.
    #[arg(long, conflicts_with = "random")]
    scene: Option<PathBuf>,

    /// Generate this many random rectangles instead of loading a scene.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Initial view as left,right,top,bottom.
    #[arg(long, env = config::ENV_VIEW, value_parser = config::parse_view, allow_hyphen_values = true)]
    view: Option<ViewRect>,

    /// Surface size as WIDTHxHEIGHT.
    #[arg(long, env = config::ENV_SIZE, value_parser = config::parse_size)]
    size: Option<Size>,

    /// Pan by DX,DY world units before rendering.
    #[arg(long, value_parser = config::parse_pair, allow_hyphen_values = true)]
    pan: Option<Point>,

    /// Zoom by this factor (< 1 zooms in) before rendering.
    #[arg(long, value_parser = config::parse_zoom_factor)]
    zoom: Option<f64>,

    /// Anchor --zoom at this surface point (X,Y) instead of the view center.
    #[arg(long, value_parser = config::parse_pair, requires = "zoom")]
    zoom_at: Option<Point>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let cfg = GraphConfig::from_env()?;

    let scene = match (&cli.scene, cli.random) {
        (Some(path), _) => Scene::load(path)?,
        (None, Some(count)) => Scene::random(&mut StdRng::seed_from_u64(cli.seed), count),
        (None, None) => Scene::demo(),
    };

    let mut viewport = Viewport::new(cli.view.unwrap_or(cfg.view), cli.size.unwrap_or(cfg.size));
    if let Some(pan) = cli.pan {
        viewport.move_view(pan.x, pan.y);
    }
    if let Some(factor) = cli.zoom {
        match cli.zoom_at {
            Some(origin) => {
                if !viewport.scale_view_with_origin(factor, origin) {
                    tracing::warn!("surface has no area; --zoom-at ignored");
                }
            }
            None => viewport.scale_view(factor),
        }
    }

    let mut surface = RecordingSurface::new();
    let stats = render::draw_scene(&mut surface, &viewport, &scene.shapes)?;
    tracing::info!(drawn = stats.drawn, culled = stats.culled, view = ?viewport.view(), "rendered");

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, surface.commands())?;
    writeln!(out)?;
    Ok(())
}
