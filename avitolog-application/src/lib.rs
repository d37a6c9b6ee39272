mod banned_words;
mod block_user;
mod censor_text;
mod create_comment;
mod delete_comment;
mod listings;
mod register_user;

pub mod prelude {
    pub use super::{
        banned_words::*, block_user::*, censor_text::*, create_comment::*, delete_comment::*,
        listings::*, register_user::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use avitolog_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod memory {
    pub use avitolog_db_memory::Connections;
}
