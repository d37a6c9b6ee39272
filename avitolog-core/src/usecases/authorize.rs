use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Loads the account that performs a request.
///
/// Unknown and deactivated accounts are rejected.
pub fn authenticate_user<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    match repo.get_user(user_id) {
        Ok(user) if user.active => Ok(user),
        Ok(_) => {
            log::debug!("Rejecting deactivated account {user_id}");
            Err(Error::Unauthorized)
        }
        Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(Error::Repo(err)),
    }
}

pub fn authorize_user_by_id<R: UserRepo>(
    repo: &R,
    user_id: &str,
    min_required_role: Role,
) -> Result<User> {
    let user = authenticate_user(repo, user_id)?;
    crate::authorization::user::authorize_role(&user, min_required_role)
        .map(|()| user)
        .map_err(|_| Error::Forbidden)
}

pub(crate) fn load_target_user<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    repo.get_user(user_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => Error::Repo(err),
    })
}
