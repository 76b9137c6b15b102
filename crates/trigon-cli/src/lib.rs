use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use trigon_core::{compute_angles, layout_triangle, AngleSet, LayoutConfig, Point, Triangle};
use trigon_svg::{save_svg, SvgStyle};

pub mod config;

#[derive(Debug, Parser)]
#[command(name = "trigon")]
#[command(about = "Interior angles of a triangle, laid out for drawing.")]
pub struct Cli {
    /// TOML layout configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Overrides `RUST_LOG`, which defaults to `warn`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[arg(long, global = true)]
    pub arc_radius: Option<f64>,
    #[arg(long, global = true)]
    pub label_offset: Option<f64>,
    #[command(subcommand)]
    pub cmd: Command,
}

impl Cli {
    /// Level forced by `--log-level`, if given. Unknown names fall back to `warn`.
    pub fn log_level_override(&self) -> Option<LevelFilter> {
        let name = self.log_level.as_deref()?;
        Some(LevelFilter::from_str(name).unwrap_or_else(|_| {
            eprintln!("Invalid log level: {name}. Using 'warn' instead.");
            LevelFilter::Warn
        }))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the three interior angles.
    Angles {
        #[command(flatten)]
        points: PointsArgs,
    },
    /// Print (or write) the full drawing layout as JSON.
    Layout {
        #[command(flatten)]
        points: PointsArgs,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Draw the triangle to an SVG file.
    Draw {
        #[command(flatten)]
        points: PointsArgs,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct PointsArgs {
    /// Three vertices as `x,y`, after any options; the default triangle when omitted.
    #[arg(value_name = "X,Y", num_args = 0..=3, allow_hyphen_values = true)]
    pub points: Vec<Point>,
}

impl PointsArgs {
    pub fn triangle(&self) -> Result<Triangle> {
        match self.points.as_slice() {
            [] => {
                info!("no points given, using the default triangle");
                Ok(Triangle::default())
            }
            [a, b, c] => Ok(Triangle::new(*a, *b, *c)),
            other => bail!("expected 3 points, got {}", other.len()),
        }
    }
}

#[derive(Debug, Serialize)]
struct AnglesReport {
    vertices: [Point; 3],
    angles: AngleSet,
    sum: f64,
    degenerate: bool,
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let cfg = resolve_config(cli)?;
    debug!("layout config: {cfg:?}");

    match &cli.cmd {
        Command::Angles { points } => {
            let triangle = points.triangle()?;
            let angles = compute_angles(&triangle);
            let report = AnglesReport {
                vertices: triangle.vertices,
                angles,
                sum: angles.sum(),
                degenerate: triangle.is_degenerate(),
            };
            print_json(out, &report)
        }
        Command::Layout { points, report } => {
            let layout = layout_triangle(&points.triangle()?, &cfg);
            match report {
                Some(path) => write_json(path, &layout),
                None => print_json(out, &layout),
            }
        }
        Command::Draw {
            points,
            out: svg_path,
            report,
        } => {
            let layout = layout_triangle(&points.triangle()?, &cfg);
            save_svg(svg_path, &layout, &SvgStyle::default())?;
            info!("wrote {}", svg_path.display());
            if let Some(path) = report {
                write_json(path, &layout)?;
            }
            writeln!(out, "{}", svg_path.display()).context("write stdout")?;
            Ok(())
        }
    }
}

/// File configuration with command line overrides applied, validated.
pub fn resolve_config(cli: &Cli) -> Result<LayoutConfig> {
    let mut cfg = config::load_config(cli.config.as_deref())?;
    if let Some(r) = cli.arc_radius {
        cfg.arc_radius = r;
    }
    if let Some(o) = cli.label_offset {
        cfg.label_offset = o;
    }
    cfg.validate().context("invalid layout configuration")?;
    Ok(cfg)
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    writeln!(out, "{json}").context("write stdout")?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create report dir: {parent:?}"))?;
        }
    }
    std::fs::write(path, json).with_context(|| format!("write report: {path:?}"))?;
    info!("wrote {}", path.display());
    Ok(())
}
