use chrono_english::Dialect;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Maximum rows shown in the preview table
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    /// Dialect for natural-language dates ('us' or 'uk')
    #[serde(default = "default_date_dialect")]
    pub date_dialect: String,
}

fn default_display_limit() -> usize {
    30
}

fn default_date_dialect() -> String {
    "us".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            date_dialect: default_date_dialect(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CADENCE_"))
            .extract()
    }

    pub fn dialect(&self) -> Dialect {
        match self.date_dialect.to_lowercase().as_str() {
            "uk" => Dialect::Uk,
            _ => Dialect::Us,
        }
    }
}
