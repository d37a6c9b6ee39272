use super::prelude::*;
use crate::text;

/// Censors the text with the currently active banned words.
pub fn censor_text<R: BannedWordRepo>(repo: &R, text: &str) -> Result<String> {
    let banned_words = repo.active_banned_words()?;
    Ok(text::censor(text, &banned_words))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn censor_with_active_words() {
        let db = MockDb::default();
        db.add_banned_words(&["spam", "scam"]);
        db.banned_words.borrow_mut()[1].active = false;
        assert_eq!("****, scam!", censor_text(&db, "spam, scam!").unwrap());
    }

    #[test]
    fn fail_if_words_are_unavailable() {
        let db = MockDb::default();
        db.banned_words_unavailable.set(true);
        assert!(censor_text(&db, "spam").is_err());
    }
}
