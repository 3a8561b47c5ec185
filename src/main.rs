use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use minedash::config::FileConfig;
use minedash::dashboard;
use minedash::domain::Parameter;
use minedash::scoring::score_text;

/// Synthetic mine dashboard data and text sentiment scoring
///
/// Examples:
///   # Dashboard payload for the default window, printed to stdout
///   minedash dashboard
///
///   # Methane readings over a narrow window, written to a file
///   minedash dashboard -p methane --start 2019-01-01T00:00 --end 2019-06-01T00:00 -o dash.json
///
///   # Keep drawing until every tick lands inside its zone
///   minedash dashboard --retry --seed 7
///
///   # Score a sentence with artifacts from ./artefacts
///   minedash score "What a great film"
#[derive(Parser, Debug)]
#[command(name = "minedash")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches minedash.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the dashboard payload as JSON
    Dashboard {
        /// Window start, YYYY-MM-DDTHH:MM (UTC)
        #[arg(long)]
        start: Option<String>,

        /// Window end, YYYY-MM-DDTHH:MM (UTC)
        #[arg(long)]
        end: Option<String>,

        /// Measured parameter shown in titles
        #[arg(short = 'p', long)]
        parameter: Option<Parameter>,

        /// Random seed for zones, readings and movement flags
        #[arg(long)]
        seed: Option<u64>,

        /// Number of ticks on the synthetic time axis
        #[arg(long)]
        tick_count: Option<usize>,

        /// Timestamp of the first tick, epoch seconds
        #[arg(long, allow_hyphen_values = true)]
        base_timestamp: Option<i64>,

        /// Seconds between ticks
        #[arg(long)]
        tick_interval: Option<i64>,

        /// Redraw each tick until its point lands inside the zone
        #[arg(long)]
        retry: bool,

        /// Output JSON file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Score the sentiment of a piece of text
    Score {
        /// Text to score
        text: String,

        /// Directory containing tf-idf.json and logreg.json
        #[arg(long)]
        artifacts: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let file_config: FileConfig = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    match args.command {
        Command::Dashboard {
            start,
            end,
            parameter,
            seed,
            tick_count,
            base_timestamp,
            tick_interval,
            retry,
            output,
        } => {
            let mut request = file_config.dashboard.to_request();
            if let Some(start) = start {
                request.start_time = start;
            }
            if let Some(end) = end {
                request.end_time = end;
            }
            if let Some(parameter) = parameter {
                request.parameter = parameter;
            }
            if let Some(seed) = seed {
                request.seed = seed;
            }
            if let Some(count) = tick_count {
                request.series.tick_count = count;
            }
            if let Some(base) = base_timestamp {
                request.series.base_timestamp = base;
            }
            if let Some(interval) = tick_interval {
                request.series.tick_interval_secs = interval;
            }
            request.series.retry_until_accepted |= retry;

            let payload =
                dashboard::generate(&request).context("Failed to build dashboard data")?;

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .context(format!("Failed to create output file: {:?}", path))?;
                    let mut writer = BufWriter::new(file);
                    serde_json::to_writer_pretty(&mut writer, &payload)
                        .context("Failed to write dashboard JSON")?;
                    writer.flush()?;
                    log::info!("Wrote dashboard to {}", path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut handle = stdout.lock();
                    serde_json::to_writer_pretty(&mut handle, &payload)
                        .context("Failed to write dashboard JSON")?;
                    writeln!(handle)?;
                }
            }
        }
        Command::Score { text, artifacts } => {
            let dir = artifacts.unwrap_or(file_config.scoring.artifacts_dir);
            let score = score_text(&dir, &text);
            println!("Score: {:.3}, Sentiment: {}", score.score, score.sentiment);
        }
    }

    Ok(())
}
