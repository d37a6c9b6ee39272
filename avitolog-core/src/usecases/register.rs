use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        username,
        password,
        email,
    } = new_user;
    let username = username.trim().to_owned();
    if !validate::is_valid_username(&username) {
        return Err(Error::Username);
    }
    let email = match email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => {
            let email = email.parse::<EmailAddress>()?;
            if !validate::is_valid_email(email.as_str()) {
                return Err(Error::EmailAddress);
            }
            Some(email)
        }
        _ => None,
    };
    if repo.try_get_user_by_username(&username)?.is_some() {
        return Err(Error::UserExists);
    }
    let password = password.parse::<Password>()?;
    let user = User {
        id: Id::new(),
        username,
        email,
        password,
        role: Role::User,
        active: true,
        blocked_at: None,
        blocked_reason: None,
    };
    log::debug!("Creating new user: username = {}", user.username);
    repo.create_user(&user)?;
    Ok(user)
}
