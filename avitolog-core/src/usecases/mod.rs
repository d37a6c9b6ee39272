mod authorize;
mod banned_words;
mod block_user;
mod censor_text;
mod create_comment;
mod create_listing;
mod delete_comment;
mod error;
mod get_user_account;
mod load_comments;
mod login;
mod moderation_log;
mod most_popular_listings;
mod register;
mod view_listing;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, banned_words::*, block_user::*, censor_text::*, create_comment::*,
    create_listing::*, delete_comment::*, error::Error, get_user_account::*, load_comments::*,
    login::*, moderation_log::*, most_popular_listings::*, register::*, view_listing::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
