use super::*;

pub fn register_user(
    connections: &memory::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let username = new_user.username.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, new_user).map_err(|err| {
            log::warn!("Failed to register user {username}: {err}");
            err
        })
    })?)
}
