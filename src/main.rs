//! # Before-Closure Analysis Entry Point
//!
//! This binary drives the analysis library on a synthetic DFIT shut-in decline:
//! it loads the configuration, computes the square-root-time or G-function
//! series, and prints a table (or JSON) plus an optional cursor readout.
//!
//! ## Usage
//!
//! ```bash
//! # G-function table with the configured window
//! bca-analysis
//!
//! # Square-root time, narrower window, readout near x = 1.2
//! bca-analysis --mode sqrt --window 5 --cursor 1.2
//!
//! # Full series as JSON
//! bca-analysis --json
//! ```

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use bca_lib::{
    analysis::BcaSession, closure::pick_closure, config::Config, report::print_report, synthetic,
    AnalysisMode,
};
use chrono::Local;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Before-closure analysis of a DFIT pressure decline
#[derive(Parser)]
#[command(name = "bca-analysis")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to bca-config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Time transform, overriding the configured mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Smoothing window half-width, overriding the configured one
    #[arg(short, long)]
    window: Option<usize>,

    /// Report the sample nearest to this x coordinate
    #[arg(short, long, allow_negative_numbers = true)]
    cursor: Option<f64>,

    /// Mark closure at the sample nearest to this x coordinate
    #[arg(long, allow_negative_numbers = true)]
    closure: Option<f64>,

    /// Print the series as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Square-root time
    Sqrt,
    /// G-function time
    G,
}

impl From<ModeArg> for AnalysisMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sqrt => AnalysisMode::SquareRootTime,
            ModeArg::G => AnalysisMode::GFunction,
        }
    }
}

/// Main application entry point.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let mode = cli.mode.map(AnalysisMode::from).unwrap_or(config.analysis.mode);
    let window = cli.window.unwrap_or(config.analysis.window_half_width);

    let record = synthetic::decline(&config.synthetic);
    info!(
        "Synthetic decline: {} samples, ISIP {} psi",
        record.len(),
        config.synthetic.isip
    );

    let mut session =
        BcaSession::new(record, mode, window).context("before-closure analysis failed")?;
    let cursor = cli
        .cursor
        .map(|query| session.cursor(query))
        .transpose()
        .context("cursor lookup failed")?;

    let series = session
        .series()
        .context("analysis produced no series")?;
    debug!("Series ready: {:?}, {} samples", series.mode, series.len());

    if cli.json {
        let json = serde_json::to_string_pretty(series)?;
        println!("{}", json);
        return Ok(());
    }

    println!("Generated {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    print_report(
        series,
        session.record().pressure(),
        cursor.as_ref(),
        config.report.rows,
        config.report.precision,
    );

    if let Some(query) = cli.closure {
        let index = bca_lib::nearest::nearest(&series.x, query)?;
        let pick = pick_closure(series, session.record().pressure(), index)?;
        let [_, end] = pick.origin_line(series.x.last().copied().unwrap_or(0.0));
        println!();
        println!(
            "Closure at sample {}: x = {:.p$}, pressure = {:.p$} psi",
            pick.index,
            pick.x,
            pick.pressure,
            p = config.report.precision
        );
        println!(
            "Origin line: (0, 0) to ({:.p$}, {:.p$})",
            end.0,
            end.1,
            p = config.report.precision
        );
    }

    Ok(())
}
