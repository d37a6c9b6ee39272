use crate::{activity::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub listing_id : Id,
    pub author_id  : Id,
    pub created_at : Timestamp,
    // Soft deletion, deleted comments are hidden but kept.
    pub deleted    : Option<Activity>,
    pub text       : String,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }
}
