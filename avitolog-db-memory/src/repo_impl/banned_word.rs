use super::*;

macro_rules! impl_banned_word_repo {
    ($($db:ty),+) => {$(
        impl BannedWordRepo for $db {
            fn add_or_activate_banned_word(&self, word: &BannedWord) -> Result<()> {
                self.write(|t| add_or_activate_banned_word(t, word))
            }
            fn deactivate_banned_word(&self, word: &str) -> Result<()> {
                self.write(|t| deactivate_banned_word(t, word))
            }

            fn all_banned_words(&self) -> Result<Vec<BannedWord>> {
                self.read(|t| Ok(t.banned_words.clone()))
            }
        }
    )+};
}

impl_banned_word_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

fn add_or_activate_banned_word(tables: &mut Tables, word: &BannedWord) -> Result<()> {
    match tables
        .banned_words
        .iter_mut()
        .find(|w| w.as_str() == word.as_str())
    {
        Some(existing) => existing.active = true,
        None => tables.banned_words.push(word.clone()),
    }
    Ok(())
}

fn deactivate_banned_word(tables: &mut Tables, word: &str) -> Result<()> {
    let existing = tables
        .banned_words
        .iter_mut()
        .find(|w| w.as_str() == word)
        .ok_or(repo::Error::NotFound)?;
    existing.active = false;
    Ok(())
}
