use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("avitolog.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub moderation: Option<Moderation>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Moderation {
    #[serde(default)]
    pub banned_words: Vec<String>,
    pub banned_words_file: Option<PathBuf>,
}

impl Default for Moderation {
    fn default() -> Self {
        Config::default()
            .moderation
            .expect("Moderation configuration")
    }
}
