use crate::{
    compose::{compose_true_pass_rate, ScoreTier},
    config::Config,
    dataset,
    pipeline::{export_run, format_summary, Pipeline},
    report::format_breakdown,
    table::{render_dataset, render_tier_spread},
    util::{ensure_dir, now_rfc3339},
};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_CONFIG: &str = "license-odds.toml";

#[derive(Parser, Debug)]
#[command(name = "license-odds")]
#[command(about = "True pass-rate report for licensed professions (selection x graduation x exam)")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Path to config TOML. If omitted, uses ./license-odds.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Breakdowns, ranked table and CSV export (the default).
    Report {
        /// CSV destination; overrides export.csv_path.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum)]
        tier: Option<ScoreTier>,
    },
    /// Breakdown for a single profession.
    Show {
        name: String,
        #[arg(long, value_enum)]
        tier: Option<ScoreTier>,
    },
    /// True pass percentage at the low, average and high admission scores.
    Tiers {},
    /// The embedded dataset.
    List {},
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref());
    let loaded = Config::load_or_default(cfg_path.as_deref());
    // A broken config still gets default logging so the error is visible.
    let _guard = init_logging(&args, loaded.as_ref().unwrap_or(&Config::default()))?;
    let cfg = loaded?;

    if let Some(p) = &cfg_path {
        info!("config {}", p.display());
    }

    match args.cmd {
        None => report(cfg, None, None),
        Some(Command::Report { out, tier }) => report(cfg, out.as_deref(), tier),
        Some(Command::Show { name, tier }) => show(&cfg, &name, tier),
        Some(Command::Tiers {}) => tiers(&cfg),
        Some(Command::List {}) => {
            println!("{}", render_dataset(dataset::all()));
            Ok(())
        }
    }
}

fn resolve_config_path(user: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = user {
        return Some(p.to_path_buf());
    }
    let default = PathBuf::from(DEFAULT_CONFIG);
    default.exists().then_some(default)
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let csv_override = match &args.cmd {
        Some(Command::Report { out, .. }) => out.as_deref(),
        _ => None,
    };

    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = match resolve_log_path(cfg, csv_override) {
        Some(path) => {
            let parent = path.parent().unwrap_or_else(|| Path::new("."));
            ensure_dir(parent)?;
            let file = std::fs::File::create(&path)
                .with_context(|| format!("create log file: {}", path.display()))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

/// Explicit `logging.file_path`, else next to the CSV the run will write.
fn resolve_log_path(cfg: &Config, csv_override: Option<&Path>) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }
    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }
    let csv_dir = csv_override
        .unwrap_or_else(|| Path::new(&cfg.export.csv_path))
        .parent()
        .unwrap_or_else(|| Path::new("."));
    Some(csv_dir.join("license-odds.log"))
}

fn report(mut cfg: Config, out: Option<&Path>, tier: Option<ScoreTier>) -> Result<()> {
    if let Some(t) = tier {
        cfg.report.tier = t;
    }
    let started = now_rfc3339();

    let pipeline = Pipeline::new(&cfg, dataset::all());
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let run = pipeline.run(&mut lock)?;
    write!(lock, "{}", format_summary(&run, &cfg))?;
    lock.flush()?;
    drop(lock);

    if !cfg.export.enabled {
        return Ok(());
    }

    let csv_path = out
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.export.csv_path));
    export_run(&cfg, &run, &csv_path, &started)?;
    println!("\nExported results to {}", csv_path.display());
    Ok(())
}

fn show(cfg: &Config, name: &str, tier: Option<ScoreTier>) -> Result<()> {
    let record = dataset::find(name).ok_or_else(|| anyhow!("unknown profession: {name}"))?;
    if let Some(base) = record.prerequisite_license {
        return Err(anyhow!(
            "{name} requires the {base} license first; no combined rate is computed"
        ));
    }

    let tier = tier.unwrap_or(cfg.report.tier);
    let result = compose_true_pass_rate(record, tier);
    println!("{}", format_breakdown(record, &result, tier));
    Ok(())
}

fn tiers(cfg: &Config) -> Result<()> {
    let pipeline = Pipeline::new(cfg, dataset::all());
    println!("{}", render_tier_spread(&pipeline.tier_spread()));
    Ok(())
}
