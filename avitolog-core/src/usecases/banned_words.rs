use super::prelude::*;
use std::collections::HashSet;

pub fn list_banned_words<R: BannedWordRepo>(repo: &R) -> Result<Vec<BannedWord>> {
    Ok(repo.all_banned_words()?)
}

pub fn add_banned_word<R>(repo: &R, actor_id: &str, word: &str) -> Result<BannedWord>
where
    R: UserRepo + BannedWordRepo,
{
    let actor = super::authorize_user_by_id(repo, actor_id, Role::Staff)?;
    let word = BannedWord::new(word);
    if word.is_empty() {
        return Err(Error::BannedWord);
    }
    log::info!("Adding banned word '{}' by {}", word.as_str(), actor.username);
    repo.add_or_activate_banned_word(&word)?;
    Ok(word)
}

pub fn deactivate_banned_word<R>(repo: &R, actor_id: &str, word: &str) -> Result<()>
where
    R: UserRepo + BannedWordRepo,
{
    let actor = super::authorize_user_by_id(repo, actor_id, Role::Staff)?;
    let word = BannedWord::new(word);
    if word.is_empty() {
        return Err(Error::BannedWord);
    }
    log::info!(
        "Deactivating banned word '{}' by {}",
        word.as_str(),
        actor.username
    );
    Ok(repo.deactivate_banned_word(word.as_str())?)
}

/// Adds (or reactivates) all given words, e.g. from a word list file.
///
/// Blank entries and duplicates are skipped. Returns the number of
/// distinct words that have been imported.
pub fn import_banned_words<R, I>(repo: &R, words: I) -> Result<usize>
where
    R: BannedWordRepo,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut imported = HashSet::new();
    for word in words {
        let word = BannedWord::new(word.as_ref());
        if word.is_empty() || imported.contains(word.as_str()) {
            continue;
        }
        repo.add_or_activate_banned_word(&word)?;
        imported.insert(String::from(word));
    }
    log::debug!("Imported {} banned words", imported.len());
    Ok(imported.len())
}
