use super::prelude::*;

pub fn recent_moderation_actions<R>(
    repo: &R,
    actor_id: &str,
    limit: usize,
) -> Result<Vec<ModerationLogEntry>>
where
    R: UserRepo + ModerationLogRepo,
{
    super::authorize_user_by_id(repo, actor_id, Role::Staff)?;
    Ok(repo.recent_moderation_actions(limit)?)
}
