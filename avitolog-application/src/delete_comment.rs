use super::*;

pub fn delete_comment(
    connections: &memory::Connections,
    actor_id: &str,
    comment_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_comment(conn, actor_id, comment_id).map_err(|err| {
            log::warn!("Failed to delete comment {comment_id}: {err}");
            err
        })
    })?)
}
