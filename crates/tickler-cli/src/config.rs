use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tickler.toml";
pub const ENV_PREFIX: &str = "TICKLER_";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database file, created on first use
    pub database_path: String,
    /// Default number of tasks shown by `list`
    pub list_limit: usize,
    /// Default number of dates shown by `preview`
    pub preview_count: usize,
    /// Log filter used when `TICKLER_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "tickler.db".to_string(),
            list_limit: 50,
            preview_count: 5,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
