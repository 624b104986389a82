use std::{env, path::PathBuf, time::Duration};

use log::{debug, error, info};

use crate::error::{ChatError, Result};
use crate::responder::MatchMode;

const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub reply_delay: Duration,
    pub rules_path: Option<PathBuf>,
    /// Overrides the rule table's own match mode when set.
    pub match_mode: Option<MatchMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            rules_path: None,
            match_mode: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = var("OCEANCHAT_REPLY_DELAY_MS") {
            let millis: u64 = raw.trim().parse().map_err(|e| {
                error!("Failed to parse OCEANCHAT_REPLY_DELAY_MS='{raw}': {e}");
                ChatError::Config(format!("OCEANCHAT_REPLY_DELAY_MS must be an integer: {e}"))
            })?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(path) = var("OCEANCHAT_RULES_PATH").filter(|p| !p.trim().is_empty()) {
            config.rules_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = var("OCEANCHAT_MATCH_MODE").filter(|m| !m.trim().is_empty()) {
            let mode: MatchMode = raw.trim().parse().map_err(|e| {
                error!("Failed to parse OCEANCHAT_MATCH_MODE='{raw}': {e}");
                ChatError::Config(format!("unknown match mode '{raw}'"))
            })?;
            config.match_mode = Some(mode);
        }

        info!("Configuration loaded successfully");
        debug!("Reply delay: {:?}", config.reply_delay);
        debug!("Rules path: {:?}", config.rules_path);
        debug!("Match mode override: {:?}", config.match_mode);

        Ok(config)
    }
}
