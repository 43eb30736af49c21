use std::collections::BTreeMap;

/// Team name (or abbreviation) → logo image URL. Keys iterate sorted.
pub type LogoMap = BTreeMap<String, String>;

/// Result of looking up a single team page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamOutcome {
    Found(String),
    NotFound,
}

impl From<Option<String>> for TeamOutcome {
    fn from(src: Option<String>) -> Self {
        match src {
            Some(s) => TeamOutcome::Found(s),
            None => TeamOutcome::NotFound,
        }
    }
}

/// Aggregate of one enumeration run.
#[derive(Debug, Default)]
pub struct TeamLogos {
    pub logos: LogoMap,
    /// Identifiers whose page had no logo, in the order they were visited.
    pub not_found: Vec<String>,
}

impl TeamLogos {
    pub fn record(&mut self, team_id: &str, outcome: TeamOutcome) {
        match outcome {
            TeamOutcome::Found(src) => {
                self.logos.insert(team_id.to_string(), src);
            }
            TeamOutcome::NotFound => self.not_found.push(team_id.to_string()),
        }
    }
}

/// Merge two maps into a new one; `preferred` wins on key collisions.
pub fn merge(preferred: &LogoMap, other: &LogoMap) -> LogoMap {
    let mut merged = other.clone();
    merged.extend(preferred.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
