use super::*;

pub fn block_user(
    connections: &memory::Connections,
    actor_id: &str,
    block: usecases::BlockUser,
) -> Result<User> {
    let user_id = block.user_id.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::block_user(conn, actor_id, block).map_err(|err| {
            log::warn!("Failed to block user {user_id}: {err}");
            err
        })
    })?)
}

pub fn unblock_user(
    connections: &memory::Connections,
    actor_id: &str,
    user_id: &str,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unblock_user(conn, actor_id, user_id).map_err(|err| {
            log::warn!("Failed to unblock user {user_id}: {err}");
            err
        })
    })?)
}
