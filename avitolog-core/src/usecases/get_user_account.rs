use super::prelude::*;

/// What a user gets to know about the own account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: Id,
    pub username: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_blocked: bool,
}

impl From<&User> for UserAccount {
    fn from(from: &User) -> Self {
        Self {
            id: from.id.clone(),
            username: from.username.clone(),
            is_staff: from.is_staff(),
            is_superuser: from.is_superuser(),
            is_blocked: from.is_blocked(),
        }
    }
}

pub fn get_user_account<R: UserRepo>(repo: &R, user_id: &str) -> Result<UserAccount> {
    let user = super::authenticate_user(repo, user_id)?;
    Ok(UserAccount::from(&user))
}
