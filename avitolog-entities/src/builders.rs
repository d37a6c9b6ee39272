pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, listing_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse::<Password>().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn inactive(mut self) -> Self {
            self.user.active = false;
            self
        }
        pub fn blocked(mut self, reason: &str) -> Self {
            self.user.blocked_at = Some(Timestamp::now());
            self.user.blocked_reason = Some(reason.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "".into(),
                    email: None,
                    password: "secret123".parse().unwrap(),
                    role: Role::default(),
                    active: true,
                    blocked_at: None,
                    blocked_reason: None,
                },
            }
        }
    }
}

pub mod listing_builder {

    use super::*;
    use crate::{id::*, listing::*, time::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.listing.url = url.parse().unwrap();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.listing.title = title.into();
            self
        }
        pub fn price(mut self, price: &str) -> Self {
            self.listing.price = Some(price.parse().unwrap());
            self
        }
        pub fn views_count(mut self, views_count: u64) -> Self {
            self.listing.views_count = views_count;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.listing.created_at = created_at;
            self.listing.updated_at = created_at;
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            let id = Id::new();
            let now = Timestamp::now();
            ListingBuild {
                listing: Listing {
                    url: format!("https://www.avito.ru/moskva/{id}").parse().unwrap(),
                    id,
                    title: "".into(),
                    image_url: None,
                    price: None,
                    description: "".into(),
                    published_at: None,
                    views_count: 0,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{activity::*, comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn listing_id(mut self, id: &str) -> Self {
            self.comment.listing_id = id.into();
            self
        }
        pub fn author_id(mut self, id: &str) -> Self {
            self.comment.author_id = id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn deleted_by(mut self, id: &str) -> Self {
            self.comment.deleted = Some(Activity::now(Some(id.into())));
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    listing_id: Id::new(),
                    author_id: Id::new(),
                    created_at: Timestamp::now(),
                    deleted: None,
                    text: "".into(),
                },
            }
        }
    }
}
