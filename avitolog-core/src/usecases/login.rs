use super::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login<R: UserRepo>(repo: &R, login: &Credentials) -> Result<User> {
    let user = repo
        .try_get_user_by_username(login.username.trim())?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    if !user.active {
        return Err(Error::AccountInactive);
    }
    Ok(user)
}
