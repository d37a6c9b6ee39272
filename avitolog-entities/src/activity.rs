use crate::{id::*, time::*};

/// Who did something and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: Timestamp,
    pub by: Option<Id>,
}

impl Activity {
    pub fn now(by: Option<Id>) -> Self {
        Self {
            at: Timestamp::now(),
            by,
        }
    }
}
