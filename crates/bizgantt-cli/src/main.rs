//! bizgantt CLI - Business-day Gantt charts
//!
//! Reads a planner CSV export, filters it, lays it out on a business-day
//! timeline and writes SVG (or the raw layout as JSON).

mod config;
mod exit;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bizgantt_core::{Px, RenderError, Renderer, TaskFilter};
use bizgantt_layout::{LayoutEngine, LayoutOptions};
use bizgantt_render::{EstimatedMetrics, SvgRenderer};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::ChartConfig;
use exit::ExitCode;

#[derive(Parser)]
#[command(name = "bizgantt")]
#[command(author, version, about = "Business-day Gantt charts from planner exports", long_about = None)]
struct Cli {
    /// Planner CSV export
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canvas width in pixels (0 = automatic)
    #[arg(short, long, default_value_t = 0)]
    width: u32,

    /// Canvas height in pixels (0 = fit all rows)
    #[arg(short = 'H', long, default_value_t = 0)]
    height: u32,

    /// Deepest hierarchy level shown ("1.2.3" is level 3)
    #[arg(long, default_value_t = 2)]
    level: usize,

    /// Only show this task and its descendants
    #[arg(long, value_name = "ID")]
    zoom: Option<String>,

    /// Business days per timeline tick
    #[arg(short, long, default_value_t = 1)]
    tick_days: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// TOML file with [layout] and [style] tables
    #[arg(long, value_name = "TOML", env = "BIZGANTT_CONFIG")]
    config: Option<PathBuf>,

    /// Moment the today marker is drawn for (defaults to local time)
    #[arg(long, value_name = "YYYY-MM-DDTHH:MM", value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    /// Computed geometry, for debugging or other renderers
    Json,
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM ({e})"))
}

fn main() -> process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::Input.into()
            } else {
                ExitCode::Success.into()
            };
        }
    };

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from_error(&err).into()
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };

    let tasks = bizgantt_parser::parse_file(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;

    let filter = TaskFilter::new(cli.level).zoom(cli.zoom.clone().unwrap_or_default());
    let tasks = filter.apply(&tasks);
    info!(tasks = tasks.len(), level = cli.level, zoom = ?cli.zoom, "filtered tasks");

    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());
    let options = LayoutOptions::new(now)
        .width(cli.width as Px)
        .height(cli.height as Px)
        .tick_days(cli.tick_days);

    let engine = LayoutEngine::new(EstimatedMetrics::from_style(&config.style))
        .with_config(config.layout);
    let layout = engine.layout(&tasks, &options)?;
    debug!(width = layout.width, height = layout.height, "laid out chart");

    let rendered = match cli.format {
        Format::Svg => SvgRenderer::with_style(config.style).render(&layout)?,
        Format::Json => serde_json::to_string_pretty(&layout)
            .map_err(|e| RenderError::Format(e.to_string()))?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .map_err(RenderError::Io)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote chart");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(RenderError::Io)?;
        }
    }

    Ok(())
}
