use super::{authorize::load_target_user, prelude::*};

pub const DEFAULT_BLOCK_REASON: &str = "Blocked via moderation";

#[derive(Debug, Clone)]
pub struct BlockUser {
    pub user_id: String,
    pub reason: Option<String>,
}

/// Prevents a user from commenting. Only staff members are allowed to do this.
pub fn block_user<R>(repo: &R, actor_id: &str, block: BlockUser) -> Result<User>
where
    R: UserRepo + ModerationLogRepo,
{
    let actor = super::authorize_user_by_id(repo, actor_id, Role::Staff)?;
    let BlockUser { user_id, reason } = block;
    let mut user = load_target_user(repo, &user_id)?;
    if user.blocked_at.is_some() {
        return Ok(user);
    }
    let reason = reason
        .map(|r| r.trim().to_owned())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_BLOCK_REASON.to_owned());
    log::info!(
        "Blocking user {} by {}: {}",
        user.username,
        actor.username,
        reason
    );
    let activity = Activity::now(Some(actor.id));
    user.blocked_at = Some(activity.at);
    user.blocked_reason = Some(reason.clone());
    repo.update_user(&user)?;
    repo.log_moderation_action(&ModerationLogEntry {
        id: Id::new(),
        action: ModerationAction::BlockUser,
        created: activity,
        target_comment: None,
        target_user: Some(user.id.clone()),
        reason: Some(reason),
    })?;
    Ok(user)
}

/// Lifts a block. The last reason is kept for reference.
pub fn unblock_user<R>(repo: &R, actor_id: &str, user_id: &str) -> Result<User>
where
    R: UserRepo + ModerationLogRepo,
{
    let actor = super::authorize_user_by_id(repo, actor_id, Role::Staff)?;
    let mut user = load_target_user(repo, user_id)?;
    if user.blocked_at.is_none() {
        return Ok(user);
    }
    log::info!("Unblocking user {} by {}", user.username, actor.username);
    user.blocked_at = None;
    repo.update_user(&user)?;
    repo.log_moderation_action(&ModerationLogEntry {
        id: Id::new(),
        action: ModerationAction::UnblockUser,
        created: Activity::now(Some(actor.id)),
        target_comment: None,
        target_user: Some(user.id.clone()),
        reason: None,
    })?;
    Ok(user)
}
