use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::{Path, PathBuf};
use urania::ephemeris::midnight_utc;
use urania::generate_daily_dataset;
use urania_config::{load_almanac_settings, AlmanacSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the daily science-themed astrology dataset")]
struct Args {
    /// Calendar date to generate (YYYY-MM-DD, UTC). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Config file (otherwise configs/almanac.toml is searched).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path, overriding [output] path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Write compact JSON.
    #[arg(long)]
    compact: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn resolve_pretty(args: &Args, settings: &AlmanacSettings) -> bool {
    if args.pretty {
        true
    } else if args.compact {
        false
    } else {
        settings.pretty
    }
}

fn write_output(path: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output dir {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let settings = load_almanac_settings(args.config.as_deref())?;
    let bank = settings.template_bank()?;
    let options = settings.generation_options();

    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let dataset = generate_daily_dataset(midnight_utc(date), &options, &bank);

    if let Some(sun) = dataset.planetary_positions.get("sun") {
        log::info!("Positions for {}: Sun {} {}°", dataset.last_updated, sun.sign, sun.degree);
    }
    log::info!("{} major aspects detected", dataset.major_aspects.len());
    for (category, score) in dataset.influences.ranked().into_iter().take(3) {
        log::info!("  {}: {:.1}/100", category, score);
    }

    let json = dataset
        .to_json(resolve_pretty(&args, &settings))
        .context("Failed to serialize dataset")?;
    let out_path = args.out.clone().unwrap_or_else(|| settings.output_path.clone());
    write_output(&out_path, &json)?;

    log::info!(
        "Wrote {} predictions, {} readings, {} pairings to {}",
        dataset.predictions.len(),
        dataset.readings.len(),
        dataset.compatibility_matrix.len(),
        out_path.display()
    );
    Ok(())
}
