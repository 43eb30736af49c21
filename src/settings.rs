use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

use crate::{ncaa, roster, sports_ref};

const ENV_PREFIX: &str = "LOGOS";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; team_logos/0.1)";

/// Built-in defaults, overridden by `LOGOS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub ncaa_url: String,
    pub sr_url: String,
    pub sr_directory_url: String,
    pub season: Option<i32>,
    pub user_agent: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("ncaa_url", ncaa::DEFAULT_URL)?
            .set_default("sr_url", sports_ref::DEFAULT_URL)?
            .set_default("sr_directory_url", roster::DEFAULT_DIRECTORY_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
