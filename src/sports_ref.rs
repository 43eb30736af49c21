use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::fetch::{join_url, PageFetcher};
use crate::logos::{TeamLogos, TeamOutcome};
use crate::output;
use crate::parser::team::parse_team_logo;
use crate::roster::TeamDirectory;

pub const DEFAULT_URL: &str = "https://www.sports-reference.com/cbb/schools/";
pub const OUTPUT_FILE: &str = "logos_sr.json";

pub fn team_url(base_url: &str, team_id: &str) -> String {
    join_url(base_url, &team_id.to_lowercase())
}

/// Fetch one team page. Any page without a logo, error statuses included,
/// is `NotFound`; transport errors propagate.
pub fn lookup_team<F: PageFetcher>(fetcher: &F, base_url: &str, team_id: &str) -> Result<TeamOutcome> {
    let page = fetcher.get(&team_url(base_url, team_id))?;
    Ok(parse_team_logo(&page.body).into())
}

/// Visit every team the directory lists, one at a time.
pub fn collect_team_logos<F, D>(fetcher: &F, directory: &D, base_url: &str) -> Result<TeamLogos>
where
    F: PageFetcher,
    D: TeamDirectory,
{
    let team_ids = directory.team_ids()?;
    let mut result = TeamLogos::default();

    let pb = ProgressBar::new(team_ids.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    for team_id in &team_ids {
        pb.set_message(team_id.clone());
        let outcome = lookup_team(fetcher, base_url, team_id)?;
        if outcome == TeamOutcome::NotFound {
            debug!("No logo on page for {}", team_id);
        }
        result.record(team_id, outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Looked up {} teams ({} logos, {} not found)",
        team_ids.len(),
        result.logos.len(),
        result.not_found.len()
    );
    Ok(result)
}

/// Collect, optionally empty `out_dir`, then write `logos_sr.json`.
pub fn run<F, D>(fetcher: &F, directory: &D, base_url: &str, out_dir: &Path, clean: bool) -> Result<TeamLogos>
where
    F: PageFetcher,
    D: TeamDirectory,
{
    let result = collect_team_logos(fetcher, directory, base_url)?;
    if clean {
        output::reset_dir(out_dir)?;
    }
    output::write_logos(out_dir, OUTPUT_FILE, &result.logos)?;
    Ok(result)
}
