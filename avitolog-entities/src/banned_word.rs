/// An entry of the moderation word list.
///
/// The word is always stored trimmed and in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedWord {
    word: String,
    pub active: bool,
}

impl BannedWord {
    pub fn new(word: &str) -> Self {
        Self {
            word: normalize(word),
            active: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl From<BannedWord> for String {
    fn from(from: BannedWord) -> Self {
        from.word
    }
}

pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
