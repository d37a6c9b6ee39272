use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id             : Id,
    pub username       : String,
    pub email          : Option<EmailAddress>,
    pub password       : Password,
    pub role           : Role,
    // Inactive accounts are not allowed to log in at all.
    pub active         : bool,
    pub blocked_at     : Option<Timestamp>,
    // Kept after unblocking as an audit trail.
    pub blocked_reason : Option<String>,
}

impl User {
    /// Blocked either by a moderator or by deactivating the account.
    pub fn is_blocked(&self) -> bool {
        self.blocked_at.is_some() || !self.active
    }

    pub fn is_staff(&self) -> bool {
        self.role >= Role::Staff
    }

    pub fn is_superuser(&self) -> bool {
        self.role == Role::Superuser
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    #[default]
    User      = 0,
    Staff     = 1,
    Superuser = 2,
}
