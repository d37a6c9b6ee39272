use super::prelude::*;

/// Soft deletes a comment.
///
/// Authors may delete their own comments, staff members any comment.
/// Deleting a deleted comment again is a no-op and is not logged twice.
pub fn delete_comment<R>(repo: &R, actor_id: &str, comment_id: &str) -> Result<()>
where
    R: UserRepo + CommentRepository + ModerationLogRepo,
{
    let actor = super::authenticate_user(repo, actor_id)?;
    let comment = repo.load_comment(comment_id)?;
    if comment.author_id != actor.id && !actor.is_staff() {
        return Err(Error::Forbidden);
    }
    if comment.is_deleted() {
        log::debug!("Comment {} has already been deleted", comment.id);
        return Ok(());
    }
    log::info!("Deleting comment {} by {}", comment.id, actor.username);
    let activity = Activity::now(Some(actor.id));
    repo.mark_comment_deleted(comment.id.as_str(), &activity)?;
    repo.log_moderation_action(&ModerationLogEntry {
        id: Id::new(),
        action: ModerationAction::DeleteComment,
        created: activity,
        target_comment: Some(comment.id),
        target_user: None,
        reason: None,
    })?;
    Ok(())
}
