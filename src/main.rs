mod fetch;
mod logos;
mod ncaa;
mod output;
mod parser;
mod roster;
mod settings;
mod sports_ref;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};

use fetch::HttpFetcher;
use output::ResetError;
use roster::SportsReferenceDirectory;
use settings::Settings;

/// Merged output of the `all` command.
const MERGED_FILE: &str = "logos.json";

#[derive(Parser)]
#[command(name = "team_logos", about = "Collect college team logo URLs into JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Page through the NCAA schools index (writes logos_ncaa.json)
    Ncaa {
        /// Directory to write into
        out_dir: PathBuf,
        /// Schools index base URL; pages are <url>/0, <url>/1, ...
        #[arg(long)]
        url: Option<String>,
        /// Empty the output directory first
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        clean: bool,
    },
    /// Look up each team's Sports Reference page (writes logos_sr.json)
    Sr {
        /// Directory to write into
        out_dir: PathBuf,
        /// Team page base URL; the lower-cased abbreviation is appended
        #[arg(long)]
        url: Option<String>,
        /// Empty the output directory first
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
        clean: bool,
        /// Season whose school list is used (default: current)
        #[arg(long)]
        season: Option<i32>,
    },
    /// Run both sources, then also write a merged logos.json
    All {
        /// Directory to write into
        out_dir: PathBuf,
        /// Empty the output directory first
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        clean: bool,
        /// Season whose school list is used (default: current)
        #[arg(long)]
        season: Option<i32>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    // clap's own usage-error status is 2, which is reserved for reset failures
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_status(e.kind()));
        }
    };

    match run(cli) {
        Ok(()) => {
            println!("\nDone in {}", format_duration(t0.elapsed()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<ResetError>() {
                Some(reset) => eprintln!("{}", reset),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

/// `--help`/`--version` succeed; every other parse failure is 1.
fn parse_exit_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// 2 when the output directory could not be emptied, 1 for anything else.
fn exit_status(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<ResetError>().is_some() {
        output::RESET_EXIT_CODE
    } else {
        1
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    tracing::debug!(?settings, "Loaded settings");
    let fetcher = HttpFetcher::new(&settings.user_agent)?;

    match cli.command {
        Commands::Ncaa { out_dir, url, clean } => {
            let url = url.unwrap_or(settings.ncaa_url);
            let logos = ncaa::run(&fetcher, &url, &out_dir, clean)?;
            println!("Saved {} NCAA logos to {:?}", logos.len(), out_dir.join(ncaa::OUTPUT_FILE));
        }
        Commands::Sr { out_dir, url, clean, season } => {
            let url = url.unwrap_or_else(|| settings.sr_url.clone());
            let season = resolve_season(season, &settings);
            let directory = SportsReferenceDirectory::new(&fetcher, &settings.sr_directory_url, season);
            let result = sports_ref::run(&fetcher, &directory, &url, &out_dir, clean)?;
            println!(
                "Saved {} Sports Reference logos to {:?}",
                result.logos.len(),
                out_dir.join(sports_ref::OUTPUT_FILE)
            );
            print_not_found(&result.not_found);
        }
        Commands::All { out_dir, clean, season } => {
            let season = resolve_season(season, &settings);
            run_all(&fetcher, &settings, season, &out_dir, clean)?;
        }
    }
    Ok(())
}

/// Both sources into one directory. The reset, if any, happens once, after
/// all fetching and before the first write.
fn run_all(fetcher: &HttpFetcher, settings: &Settings, season: i32, out_dir: &Path, clean: bool) -> Result<()> {
    let ncaa_logos = ncaa::collect_logos(fetcher, &settings.ncaa_url)?;
    let directory = SportsReferenceDirectory::new(fetcher, &settings.sr_directory_url, season);
    let sr = sports_ref::collect_team_logos(fetcher, &directory, &settings.sr_url)?;

    if clean {
        output::reset_dir(out_dir)?;
    }
    output::write_logos(out_dir, ncaa::OUTPUT_FILE, &ncaa_logos)?;
    output::write_logos(out_dir, sports_ref::OUTPUT_FILE, &sr.logos)?;
    let merged = logos::merge(&ncaa_logos, &sr.logos);
    output::write_logos(out_dir, MERGED_FILE, &merged)?;

    println!(
        "Saved {} NCAA + {} Sports Reference logos ({} merged) to {:?}",
        ncaa_logos.len(),
        sr.logos.len(),
        merged.len(),
        out_dir
    );
    print_not_found(&sr.not_found);
    Ok(())
}

fn resolve_season(cli: Option<i32>, settings: &Settings) -> i32 {
    cli.or(settings.season)
        .unwrap_or_else(|| roster::current_season(Local::now().date_naive()))
}

fn print_not_found(ids: &[String]) {
    if ids.is_empty() {
        return;
    }
    println!("\nNo logo found for {} teams:", ids.len());
    for id in ids {
        println!("  {}", id);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
