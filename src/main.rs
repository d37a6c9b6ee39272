use anyhow::Result;
use avitolog_application::prelude as flows;
use avitolog_core::{text, usecases};
use avitolog_db_memory::Connections;
use clap::Parser;
use std::io::{self, Read};

mod cli;
mod config;

use cli::{Cli, Command};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli {
        config: config_file,
        banned_words_file,
        command,
    } = Cli::parse();

    let mut cfg = config::Config::try_load_from_file_or_default(config_file)?;
    if let Some(path) = banned_words_file {
        cfg.moderation.banned_words_file = Some(path);
    }

    let connections = Connections::init();
    let banned_words = cfg.moderation.load_banned_words()?;
    flows::import_banned_words(&connections, &banned_words)?;

    match command {
        Command::Censor { text } => {
            let text = text_or_stdin(text)?;
            println!("{}", flows::censor_text(&connections, &text)?);
        }
        Command::Tokenize { text } => {
            let text = text_or_stdin(text)?;
            let tokens: Vec<avitolog_boundary::Token> =
                text::tokenize(&text).into_iter().map(Into::into).collect();
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        Command::BannedWords => {
            let words: Vec<avitolog_boundary::BannedWord> =
                usecases::list_banned_words(&connections.shared()?)?
                    .into_iter()
                    .filter(|w| w.active)
                    .map(Into::into)
                    .collect();
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
    }
    Ok(())
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let trimmed_len = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(trimmed_len);
    Ok(input)
}
