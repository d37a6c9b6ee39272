pub mod prelude {

    pub use avitolog_core::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use avitolog_entities::builders::*;

    pub mod memory {
        pub use super::super::super::memory::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: memory::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db_connections: memory::Connections::init(),
            }
        }

        pub fn create_user(&self, username: &str, role: Role) -> String {
            let user = User::build().username(username).role(role).finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user.id.into()
        }

        pub fn create_listing(&self, id: &str) -> String {
            let listing = Listing::build().id(id).finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .create_listing(listing)
                .unwrap();
            id.to_owned()
        }

        pub fn try_get_user(&self, id: &str) -> Option<User> {
            self.db_connections.shared().unwrap().get_user(id).ok()
        }

        pub fn comments_of_listing(&self, listing_id: &str) -> Vec<Comment> {
            self.db_connections
                .shared()
                .unwrap()
                .load_comments_of_listing(listing_id)
                .unwrap()
        }

        pub fn moderation_log(&self) -> Vec<ModerationLogEntry> {
            self.db_connections
                .shared()
                .unwrap()
                .recent_moderation_actions(100)
                .unwrap()
        }
    }
}
