use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::fetch::PageFetcher;
use crate::parser::roster::parse_team_ids;

pub const DEFAULT_DIRECTORY_URL: &str =
    "https://www.sports-reference.com/cbb/seasons/{season}-school-stats.html";

/// Source of the team abbreviations to look up.
pub trait TeamDirectory {
    fn team_ids(&self) -> Result<Vec<String>>;
}

/// Reads every school listed in one season's school-stats table.
pub struct SportsReferenceDirectory<'a, F> {
    fetcher: &'a F,
    url: String,
}

impl<'a, F: PageFetcher> SportsReferenceDirectory<'a, F> {
    /// `url_template` may contain `{season}`.
    pub fn new(fetcher: &'a F, url_template: &str, season: i32) -> Self {
        Self {
            fetcher,
            url: url_template.replace("{season}", &season.to_string()),
        }
    }
}

impl<F: PageFetcher> TeamDirectory for SportsReferenceDirectory<'_, F> {
    fn team_ids(&self) -> Result<Vec<String>> {
        info!("Fetching team directory: {}", self.url);
        let page = self.fetcher.get(&self.url)?;
        if !page.is_ok() {
            bail!("Team directory {} returned HTTP {}", self.url, page.status);
        }
        let ids = parse_team_ids(&page.body);
        if ids.is_empty() {
            warn!("No teams listed at {}", self.url);
        }
        info!("Team directory lists {} teams", ids.len());
        Ok(ids)
    }
}

/// Seasons are named after the year they end in; play starts in November.
pub fn current_season(today: NaiveDate) -> i32 {
    if today.month() >= 11 {
        today.year() + 1
    } else {
        today.year()
    }
}
