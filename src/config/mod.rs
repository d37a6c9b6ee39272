use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "avitolog.toml";

const ENV_NAME_BANNED_WORDS_FILE: &str = "AVITOLOG_BANNED_WORDS_FILE";

pub struct Config {
    pub moderation: Moderation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Some(path) = env::var_os(ENV_NAME_BANNED_WORDS_FILE) {
            cfg.moderation.banned_words_file = Some(path.into());
        }
        Ok(cfg)
    }
}

pub struct Moderation {
    pub banned_words: Vec<String>,
    /// Plain text file with one word per line.
    pub banned_words_file: Option<PathBuf>,
}

impl Moderation {
    /// All configured words, inline entries first.
    ///
    /// A missing word list file is not an error, it just
    /// contributes no words.
    pub fn load_banned_words(&self) -> Result<Vec<String>> {
        let mut words = self.banned_words.clone();
        let Some(file_path) = &self.banned_words_file else {
            return Ok(words);
        };
        match fs::read_to_string(file_path) {
            Ok(content) => {
                let count = words.len();
                words.extend(parse_word_list(&content));
                log::debug!(
                    "Loaded {} banned words from {}",
                    words.len() - count,
                    file_path.display()
                );
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!(
                    "Banned words file {} not found => no words loaded from it",
                    file_path.display()
                );
            }
            Err(err) => return Err(err.into()),
        }
        Ok(words)
    }
}

fn parse_word_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToOwned::to_owned)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { moderation } = from;

        let raw::Moderation {
            banned_words,
            banned_words_file,
        } = moderation.unwrap_or_default();

        if banned_words_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(anyhow!("Empty path for banned-words-file"));
        }

        let banned_words = banned_words
            .into_iter()
            .map(|w| w.trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect();

        let moderation = Moderation {
            banned_words,
            banned_words_file,
        };

        Ok(Self { moderation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        Config::try_from(toml::from_str::<raw::Config>(toml)?)
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("avitolog-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg: Config = Config::try_load_from_file_or_default(file).unwrap();
        assert!(cfg.moderation.banned_words.is_empty());
    }

    #[test]
    fn missing_moderation_section() {
        let cfg = parse("").unwrap();
        assert!(cfg.moderation.banned_words.is_empty());
        assert!(cfg.moderation.banned_words_file.is_none());
    }

    #[test]
    fn skip_blank_inline_words() {
        let cfg = parse(
            r#"
            [moderation]
            banned-words = [" spam ", "", "  ", "scam"]
            "#,
        )
        .unwrap();
        assert_eq!(vec!["spam", "scam"], cfg.moderation.banned_words);
    }

    #[test]
    fn reject_empty_file_path() {
        assert!(parse("[moderation]\nbanned-words-file = \"\"").is_err());
    }

    #[test]
    fn load_words_from_file() {
        let path = temp_file("words.txt", "# insults\ndurak\n\n  Spam  \n");
        let moderation = Moderation {
            banned_words: vec!["scam".into()],
            banned_words_file: Some(path.clone()),
        };
        let words = moderation.load_banned_words().unwrap();
        fs::remove_file(path).unwrap();
        assert_eq!(vec!["scam", "durak", "Spam"], words);
    }

    #[test]
    fn ignore_missing_word_file() {
        let moderation = Moderation {
            banned_words: vec![],
            banned_words_file: Some(env::temp_dir().join("avitolog-does-not-exist.txt")),
        };
        assert!(moderation.load_banned_words().unwrap().is_empty());
    }

    #[test]
    fn load_config_file() {
        let path = temp_file(
            "config.toml",
            "[moderation]\nbanned-words = [\"durak\"]\n",
        );
        let cfg = Config::try_load_from_file_or_default(Some(&path)).unwrap();
        fs::remove_file(path).unwrap();
        assert_eq!(vec!["durak"], cfg.moderation.banned_words);
    }
}
