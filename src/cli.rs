use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Avitolog: moderation tools for classified listings.
#[derive(Parser)]
#[command(name = "avitolog", version, about)]
pub struct Cli {
    /// Configuration file (default: avitolog.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Plain text file with one banned word per line
    #[arg(long, global = true, value_name = "FILE")]
    pub banned_words_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Mask all banned words in the text
    Censor {
        /// The text to censor (default: read from stdin)
        text: Option<String>,
    },

    /// Split the text into words and separators (JSON)
    Tokenize {
        /// The text to split (default: read from stdin)
        text: Option<String>,
    },

    /// List the active banned words (JSON)
    BannedWords,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "avitolog",
            "censor",
            "some text",
            "--banned-words-file",
            "words.txt",
        ]);
        assert_eq!(Some(PathBuf::from("words.txt")), cli.banned_words_file);
        assert!(matches!(cli.command, Command::Censor { text: Some(t) } if t == "some text"));
    }

    #[test]
    fn text_is_optional() {
        let cli = Cli::parse_from(["avitolog", "tokenize"]);
        assert!(matches!(cli.command, Command::Tokenize { text: None }));
    }
}
