use strum::{AsRefStr, Display, EnumString};

use crate::{activity::*, id::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ModerationAction {
    DeleteComment,
    BlockUser,
    UnblockUser,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationLogEntry {
    pub id             : Id,
    pub action         : ModerationAction,
    pub created        : Activity,
    pub target_comment : Option<Id>,
    pub target_user    : Option<Id>,
    pub reason         : Option<String>,
}
