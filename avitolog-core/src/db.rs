use crate::repositories::*;

pub trait Db:
    UserRepo + ListingRepo + CommentRepository + BannedWordRepo + ModerationLogRepo
{
}

impl<T> Db for T where
    T: UserRepo + ListingRepo + CommentRepository + BannedWordRepo + ModerationLogRepo
{
}
