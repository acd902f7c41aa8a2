//! Ammonia Risk CLI - Main Entry Point
//!
//! Thin shell over the library: parses numbers, prints JSON.
//! Physical range checks are left to whoever calls the binary.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use ammonia_risk_core::config::Config;
use ammonia_risk_core::constants::{APP_NAME, APP_VERSION};
use ammonia_risk_core::logic::features::LayoutInfo;
use ammonia_risk_core::logic::heatmap::RiskCounts;
use ammonia_risk_core::{
    AmmoniaPipeline, HeatmapCell, ModelParameters, ValueRange, WaterSample, DEFAULT_PARAMETERS,
};

#[derive(Parser)]
#[command(name = "ammonia-risk", version, about = "Offline unionized ammonia risk estimation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict TAN, toxic NH3 and risk tier for one water sample
    Predict(PredictArgs),

    /// Evaluate a temperature × pH grid at fixed conductivity
    ///
    /// Unset options fall back to AMMONIA_* environment variables,
    /// then to compiled-in defaults.
    Heatmap(HeatmapArgs),

    /// Print the embedded model parameters and feature layout
    Params,
}

#[derive(Args)]
struct PredictArgs {
    /// Water temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,

    /// pH
    #[arg(long)]
    ph: f64,

    /// Electrical conductivity (µS/cm)
    #[arg(long)]
    conductivity: f64,

    /// Include every intermediate stage value
    #[arg(long)]
    trace: bool,
}

#[derive(Args)]
struct HeatmapArgs {
    /// Temperature axis, `lo..hi`
    #[arg(long)]
    temperature_range: Option<ValueRange>,

    /// pH axis, `lo..hi`
    #[arg(long)]
    ph_range: Option<ValueRange>,

    /// Fixed conductivity (µS/cm)
    #[arg(long)]
    conductivity: Option<f64>,

    /// Cells per axis
    #[arg(long)]
    steps: Option<usize>,
}

#[derive(Serialize)]
struct HeatmapReport {
    app: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    config: Config,
    counts: RiskCounts,
    max_toxic_nh3: Option<f64>,
    cells: Vec<Vec<HeatmapCell>>,
}

#[derive(Serialize)]
struct ParamsReport<'a> {
    layout: LayoutInfo,
    parameters: &'a ModelParameters,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    let pipeline = AmmoniaPipeline::new(&DEFAULT_PARAMETERS).context("embedded model parameters are invalid")?;

    let output = match cli.command {
        Command::Predict(args) => {
            let sample = WaterSample::new(args.temperature, args.ph, args.conductivity);
            if args.trace {
                serde_json::to_string_pretty(&pipeline.trace(&sample))?
            } else {
                serde_json::to_string_pretty(&pipeline.predict(&sample))?
            }
        }
        Command::Heatmap(args) => {
            let report = run_heatmap(&pipeline, args)?;
            serde_json::to_string_pretty(&report)?
        }
        Command::Params => serde_json::to_string_pretty(&ParamsReport {
            layout: LayoutInfo::current(),
            parameters: pipeline.params(),
        })?,
    };

    println!("{}", output);
    Ok(())
}

fn run_heatmap(pipeline: &AmmoniaPipeline<'_>, args: HeatmapArgs) -> Result<HeatmapReport> {
    let env_config = Config::from_env().context("invalid AMMONIA_* environment configuration")?;

    let config = Config {
        temperature_range: args.temperature_range.unwrap_or(env_config.temperature_range),
        ph_range: args.ph_range.unwrap_or(env_config.ph_range),
        conductivity_us_cm: args.conductivity.unwrap_or(env_config.conductivity_us_cm),
        heatmap_steps: args.steps.unwrap_or(env_config.heatmap_steps),
    };

    log::info!(
        "Heatmap {}x{}: T {} °C, pH {}, EC {} µS/cm",
        config.heatmap_steps,
        config.heatmap_steps,
        config.temperature_range,
        config.ph_range,
        config.conductivity_us_cm
    );

    let grid = pipeline.heatmap(
        config.temperature_range,
        config.ph_range,
        config.conductivity_us_cm,
        config.heatmap_steps,
    );
    let counts = grid.risk_counts();

    log::info!(
        "Heatmap done: {} safe, {} warning, {} critical",
        counts.safe,
        counts.warning,
        counts.critical
    );

    Ok(HeatmapReport {
        app: APP_NAME,
        version: APP_VERSION,
        generated_at: Utc::now(),
        config,
        counts,
        max_toxic_nh3: grid.max_toxic(),
        cells: grid.to_nested(),
    })
}
