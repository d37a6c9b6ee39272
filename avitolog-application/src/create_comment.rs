use super::*;

pub fn create_comment(
    connections: &memory::Connections,
    author_id: &str,
    listing_id: &str,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_comment(conn, author_id, listing_id, new_comment).map_err(|err| {
            log::warn!("Failed to create comment on listing {listing_id}: {err}");
            err
        })
    })?)
}
