use super::*;
use avitolog_core::{text, usecases};
use avitolog_entities as e;

impl From<text::Token<'_>> for Token {
    fn from(from: text::Token<'_>) -> Self {
        Self {
            is_word: from.is_word(),
            text: from.as_str().to_owned(),
        }
    }
}

impl From<e::banned_word::BannedWord> for BannedWord {
    fn from(from: e::banned_word::BannedWord) -> Self {
        let active = from.active;
        Self {
            word: from.into(),
            active,
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            listing_id,
            author_id,
            created_at,
            text,
            ..
        } = from;
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            author_id: author_id.into(),
            created: created_at.as_secs(),
            text,
        }
    }
}

impl From<e::listing::Listing> for Listing {
    fn from(from: e::listing::Listing) -> Self {
        let e::listing::Listing {
            id,
            url,
            title,
            image_url,
            price,
            description,
            published_at,
            views_count,
            created_at,
            ..
        } = from;
        Self {
            id: id.into(),
            url: url.into(),
            title,
            image_url: image_url.map(Into::into),
            price: price.map(|p| p.to_string()),
            description,
            published: published_at.map(e::time::Timestamp::as_secs),
            views_count,
            created: created_at.as_secs(),
        }
    }
}

impl From<usecases::UserAccount> for UserAccount {
    fn from(from: usecases::UserAccount) -> Self {
        let usecases::UserAccount {
            id,
            username,
            is_staff,
            is_superuser,
            is_blocked,
        } = from;
        Self {
            id: id.into(),
            username,
            is_staff,
            is_superuser,
            is_blocked,
        }
    }
}

impl From<e::moderation::ModerationAction> for ModerationAction {
    fn from(from: e::moderation::ModerationAction) -> Self {
        use e::moderation::ModerationAction as A;
        match from {
            A::DeleteComment => Self::DeleteComment,
            A::BlockUser => Self::BlockUser,
            A::UnblockUser => Self::UnblockUser,
        }
    }
}

impl From<e::moderation::ModerationLogEntry> for ModerationLogEntry {
    fn from(from: e::moderation::ModerationLogEntry) -> Self {
        let e::moderation::ModerationLogEntry {
            id,
            action,
            created: e::activity::Activity { at, by },
            target_comment,
            target_user,
            reason,
        } = from;
        Self {
            id: id.into(),
            action: action.into(),
            at: at.as_secs(),
            by: by.map(Into::into),
            target_comment: target_comment.map(Into::into),
            target_user: target_user.map(Into::into),
            reason,
        }
    }
}

impl From<&usecases::Error> for Error {
    fn from(from: &usecases::Error) -> Self {
        use usecases::Error as E;
        let http_status = match from {
            E::Unauthorized | E::Credentials | E::AccountInactive => 401,
            E::Forbidden | E::UserBlocked => 403,
            E::UserDoesNotExist | E::Repo(avitolog_core::repositories::Error::NotFound) => 404,
            E::UserExists | E::ListingExists => 409,
            E::Repo(_) => 500,
            _ => 400,
        };
        Self {
            http_status,
            message: from.to_string(),
        }
    }
}
