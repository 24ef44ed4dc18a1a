//! pedstat - pediatric growth, blood-pressure and bilirubin scoring
//!
//! # Usage
//!
//! ```bash
//! # Weight-for-age percentile for a 6-month-old boy
//! pedstat growth --sex male --measurement weight-for-age --age-months 6 --value 7.9
//!
//! # AAP 2017 blood-pressure stage
//! pedstat bp --systolic 118 --diastolic 72 --age-years 10 --sex female --height-percentile 50
//!
//! # AAP 2022 bilirubin thresholds
//! pedstat --json bilirubin --bilirubin 12.4 --hours 30 --ga term --risk-factors
//!
//! # Score a JSON Lines file in parallel
//! pedstat batch --input requests.jsonl --output results.jsonl
//! ```
//!
//! # Environment Variables
//!
//! - `PEDSTAT_CONFIG`: Path to a TOML config file (default: ./pedstat.toml)
//! - `RUST_LOG`: Log filter, overrides `logging.level`

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pedstat::batch;
use pedstat::config::{self, EngineConfig, OutputFormat};
use pedstat::engine;
use pedstat::reference;
use pedstat::types::{
    BilirubinResult, BpResult, GestationalAge, GrowthMeasurement, GrowthResult, HeightPercentile,
    Sex,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "pedstat")]
#[command(about = "Pediatric growth, blood-pressure and bilirubin scoring")]
#[command(version)]
struct CliArgs {
    /// Config file (overrides PEDSTAT_CONFIG and ./pedstat.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON regardless of `output.format`
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// WHO weight- or length-for-age percentile (0-24 months)
    Growth {
        #[arg(long)]
        sex: Sex,
        /// weight-for-age or length-for-age
        #[arg(long)]
        measurement: GrowthMeasurement,
        #[arg(long, allow_hyphen_values = true)]
        age_months: f64,
        /// kg for weight, cm for length
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
    },

    /// AAP 2017 blood-pressure percentiles and stage (1-17 years)
    Bp {
        #[arg(long, allow_hyphen_values = true)]
        systolic: f64,
        #[arg(long, allow_hyphen_values = true)]
        diastolic: f64,
        #[arg(long, allow_hyphen_values = true)]
        age_years: i32,
        #[arg(long)]
        sex: Sex,
        /// 5, 10, 25, 50, 75, 90 or 95
        #[arg(long, default_value = "50")]
        height_percentile: HeightPercentile,
    },

    /// AAP 2022 phototherapy and exchange thresholds (>= 35 weeks)
    Bilirubin {
        /// Total serum bilirubin (mg/dL)
        #[arg(long, allow_hyphen_values = true)]
        bilirubin: f64,
        /// Postnatal age (hours)
        #[arg(long, allow_hyphen_values = true)]
        hours: f64,
        /// term (>= 38 weeks) or late-preterm (35-37 weeks)
        #[arg(long)]
        ga: GestationalAge,
        /// Neurotoxicity risk factors present
        #[arg(long)]
        risk_factors: bool,
    },

    /// Score a JSON Lines file, one request per line
    Batch {
        /// Input file, or - for stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate every shipped reference table
    VerifyTables,

    /// Write the default configuration to a TOML file
    InitConfig {
        #[arg(long, default_value = "pedstat.toml")]
        output: PathBuf,
    },
}

// ============================================================================
// Logging & Configuration
// ============================================================================

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Load config under a temporary stderr subscriber so its warnings are seen
/// before the configured subscriber exists.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::with_default(bootstrap, || match path {
        Some(p) => EngineConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => Ok(EngineConfig::load()),
    })
}

fn init_logging(cfg: &EngineConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&cfg.logging.level.to_ascii_lowercase()))
        .with_target(false)
        .with_writer(io::stderr);
    if cfg.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialise result")?;
    println!("{text}");
    Ok(())
}

fn render_growth(r: &GrowthResult, d: usize) -> String {
    let mut out = format!(
        "{} ({}, {:.1} months): {:.d$} {}\n  Z-score:    {:.d$}\n  Percentile: {:.d$}\n  LMS:        L={:.4} M={:.4} S={:.5}",
        r.measurement,
        r.sex,
        r.age_months,
        r.value,
        r.measurement.unit(),
        r.z_score,
        r.percentile,
        r.lms.l,
        r.lms.m,
        r.lms.s,
    );
    if r.age_clamped {
        out.push_str("\n  Note:       age outside 0-24 months, scored at nearest table edge");
    }
    out
}

fn render_bp(r: &BpResult, d: usize) -> String {
    format!(
        "Classification: {}\n  Systolic:  percentile {:.d$} (Z {:.d$}), p90 {:.1} / p95 {:.1} / stage 2 {:.1}\n  Diastolic: percentile {:.d$} (Z {:.d$}), p90 {:.1} / p95 {:.1} / stage 2 {:.1}",
        r.classification,
        r.systolic_percentile,
        r.systolic_z,
        r.systolic_cut_points.p90,
        r.systolic_cut_points.p95,
        r.systolic_cut_points.stage2,
        r.diastolic_percentile,
        r.diastolic_z,
        r.diastolic_cut_points.p90,
        r.diastolic_cut_points.p95,
        r.diastolic_cut_points.stage2,
    )
}

fn render_bilirubin(r: &BilirubinResult, d: usize) -> String {
    let mut out = format!(
        "{} ({})\n  Phototherapy threshold: {:.d$} mg/dL\n  Exchange threshold:     {:.d$} mg/dL",
        r.interpretation, r.risk_category, r.phototherapy_threshold, r.exchange_threshold,
    );
    if r.hours_clamped {
        out.push_str("\n  Note: age past 120 h, 120 h thresholds applied");
    }
    out
}

fn emit<T: Serialize>(result: &T, format: OutputFormat, text: impl FnOnce(&T) -> String) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Text => {
            println!("{}", text(result));
            Ok(())
        }
    }
}

// ============================================================================
// Batch
// ============================================================================

fn run_batch(input: &str, output: Option<&Path>, cfg: &EngineConfig) -> Result<()> {
    let requests = if input == "-" {
        batch::parse_requests(io::stdin().lock())?
    } else {
        let file = File::open(input).with_context(|| format!("Failed to open {input}"))?;
        batch::parse_requests(BufReader::new(file))?
    };
    info!(count = requests.len(), input, "Scoring batch");

    let outcomes = batch::evaluate_all(&requests, &cfg.batch)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            batch::write_jsonl(BufWriter::new(file), &outcomes)?;
        }
        None => batch::write_jsonl(io::stdout().lock(), &outcomes)?,
    }

    let summary = batch::BatchSummary::from_outcomes(&outcomes);
    if summary.rejected > 0 {
        eprintln!(
            "{} of {} requests produced no result",
            summary.rejected, summary.total
        );
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut cfg = load_config(args.config.as_deref())?;
    if args.json {
        cfg.output.format = OutputFormat::Json;
    }
    init_logging(&cfg);

    if let SubCommand::InitConfig { output } = &args.command {
        EngineConfig::default().save_to_file(output)?;
        println!("Wrote default configuration to {}", output.display());
        return Ok(());
    }

    if cfg.startup.verify_tables || matches!(args.command, SubCommand::VerifyTables) {
        let count = reference::verify_registry().context("Reference tables failed validation")?;
        if matches!(args.command, SubCommand::VerifyTables) {
            println!("{count} reference tables verified");
            return Ok(());
        }
    }

    config::init(cfg);
    let cfg = config::get();
    let format = cfg.output.format;
    let d = cfg.output.decimals;

    let no_result = |e: engine::EngineError| anyhow!("No result: {e}");

    match args.command {
        SubCommand::Growth {
            sex,
            measurement,
            age_months,
            value,
        } => {
            let r = engine::growth_percentile(sex, measurement, age_months, value)
                .map_err(no_result)?;
            emit(&r, format, |r| render_growth(r, d))?;
        }
        SubCommand::Bp {
            systolic,
            diastolic,
            age_years,
            sex,
            height_percentile,
        } => {
            let r = engine::bp_classification(systolic, diastolic, age_years, sex, height_percentile)
                .map_err(no_result)?;
            emit(&r, format, |r| render_bp(r, d))?;
        }
        SubCommand::Bilirubin {
            bilirubin,
            hours,
            ga,
            risk_factors,
        } => {
            let r = engine::bilirubin_classification(bilirubin, hours, ga, risk_factors)
                .map_err(no_result)?;
            emit(&r, format, |r| render_bilirubin(r, d))?;
        }
        SubCommand::Batch { input, output } => {
            run_batch(&input, output.as_deref(), cfg)?;
        }
        SubCommand::VerifyTables | SubCommand::InitConfig { .. } => {
            bail!("subcommand already handled")
        }
    }

    io::stdout().flush()?;
    Ok(())
}
