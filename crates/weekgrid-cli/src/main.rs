//! `weekgrid` CLI — lay out calendar events on a day/week grid from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a JSON array of events (stdin → stdout)
//! cat events.json | weekgrid layout
//!
//! # From file to file, pretty-printed
//! weekgrid layout -i events.json -o layout.json --pretty
//!
//! # Grid settings from flags or from a JSON config file (flags win)
//! weekgrid layout -i events.json --min-hour 6 --timezone Europe/Berlin
//! weekgrid layout -i events.json --config grid.json --stack-all-day
//!
//! # Show how crowded each day is
//! weekgrid stats -i events.json
//! ```

use std::io::{self, Read};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use log::{debug, info, LevelFilter};
use weekgrid_layout::json::{parse_config, parse_entities, to_outputs};
use weekgrid_layout::stats::day_stats;
use weekgrid_layout::{layout, GridConfig};

#[derive(Parser)]
#[command(
    name = "weekgrid",
    version,
    about = "Collision-free layout of calendar events on a day/week grid"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out events and print the positioned units as JSON
    Layout {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Lay out events and print per-day statistics
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        grid: GridArgs,
    },
}

#[derive(Args)]
struct GridArgs {
    /// JSON grid configuration file
    #[arg(long)]
    config: Option<String>,
    /// First displayable hour (0-23)
    #[arg(long)]
    min_hour: Option<u32>,
    /// Hour after the last displayable one (1-24)
    #[arg(long)]
    max_hour: Option<u32>,
    /// IANA time zone in which calendar days are evaluated
    #[arg(long)]
    timezone: Option<String>,
    /// Give each all-day event its own full-width row
    #[arg(long)]
    stack_all_day: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Layout {
            input,
            output,
            pretty,
            grid,
        } => {
            let config = build_config(&grid)?;
            let json = read_input(input.as_deref())?;
            let entities = parse_entities(&json).context("Failed to parse events")?;
            info!("laying out {} events", entities.len());

            let units = layout(entities, &config).context("Failed to lay out events")?;
            let outputs = to_outputs(&units);
            let rendered = if pretty {
                serde_json::to_string_pretty(&outputs)?
            } else {
                serde_json::to_string(&outputs)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Stats { input, grid } => {
            let config = build_config(&grid)?;
            let json = read_input(input.as_deref())?;
            let entities = parse_entities(&json).context("Failed to parse events")?;
            let units = layout(entities, &config).context("Failed to lay out events")?;

            for day in day_stats(&units) {
                println!(
                    "{}  units: {:>3}  timed: {:>3}  all-day: {:>3}  columns: {} timed, {} all-day",
                    day.day,
                    day.units,
                    day.timed_units,
                    day.all_day_units,
                    day.max_timed_columns,
                    day.max_all_day_columns
                );
            }
        }
    }

    Ok(())
}

/// Build the grid configuration from the optional config file and the flags.
///
/// Flags override values from the file; anything unset keeps its default.
fn build_config(grid: &GridArgs) -> Result<GridConfig> {
    let mut config = match grid.config.as_deref() {
        Some(path) => {
            let json = read_input(Some(path))?;
            parse_config(&json).with_context(|| format!("Invalid config file: {}", path))?
        }
        None => GridConfig::default(),
    };

    if let Some(min_hour) = grid.min_hour {
        config.min_hour = min_hour;
    }
    if let Some(max_hour) = grid.max_hour {
        config.max_hour = max_hour;
    }
    if let Some(name) = grid.timezone.as_deref() {
        config.timezone =
            Tz::from_str(name).map_err(|e| anyhow!("Unknown timezone '{}': {}", name, e))?;
    }
    if grid.stack_all_day {
        config.arrange_all_day_vertically = true;
    }

    config.validate().context("Invalid grid configuration")?;
    debug!("grid configuration: {:?}", config);
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
