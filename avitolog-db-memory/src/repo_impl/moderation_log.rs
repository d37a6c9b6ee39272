use super::*;

macro_rules! impl_moderation_log_repo {
    ($($db:ty),+) => {$(
        impl ModerationLogRepo for $db {
            fn log_moderation_action(&self, entry: &ModerationLogEntry) -> Result<()> {
                self.write(|t| {
                    t.moderation_log.push(entry.clone());
                    Ok(())
                })
            }

            fn recent_moderation_actions(&self, limit: usize) -> Result<Vec<ModerationLogEntry>> {
                self.read(|t| Ok(t.moderation_log.iter().rev().take(limit).cloned().collect()))
            }
        }
    )+};
}

impl_moderation_log_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);
