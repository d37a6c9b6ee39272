use super::*;

macro_rules! impl_comment_repo {
    ($($db:ty),+) => {$(
        impl CommentRepository for $db {
            fn create_comment(&self, comment: Comment) -> Result<()> {
                self.write(|t| create_comment(t, comment))
            }

            fn load_comment(&self, id: &str) -> Result<Comment> {
                self.read(|t| load_comment(t, id))
            }
            fn load_comments_of_listing(&self, listing_id: &str) -> Result<Vec<Comment>> {
                self.read(|t| Ok(load_comments_of_listing(t, listing_id)))
            }

            fn mark_comment_deleted(&self, id: &str, activity: &Activity) -> Result<()> {
                self.write(|t| mark_comment_deleted(t, id, activity))
            }
        }
    )+};
}

impl_comment_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

fn create_comment(tables: &mut Tables, comment: Comment) -> Result<()> {
    if tables.comments.iter().any(|c| c.id == comment.id) {
        return Err(repo::Error::AlreadyExists);
    }
    tables.comments.push(comment);
    Ok(())
}

fn load_comment(tables: &Tables, id: &str) -> Result<Comment> {
    tables
        .comments
        .iter()
        .find(|c| c.id.as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}

fn load_comments_of_listing(tables: &Tables, listing_id: &str) -> Vec<Comment> {
    // Latest insert first among equal timestamps
    let mut comments: Vec<_> = tables
        .comments
        .iter()
        .rev()
        .filter(|c| c.listing_id.as_str() == listing_id && !c.is_deleted())
        .cloned()
        .collect();
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    comments
}

fn mark_comment_deleted(tables: &mut Tables, id: &str, activity: &Activity) -> Result<()> {
    let comment = tables
        .comments
        .iter_mut()
        .find(|c| c.id.as_str() == id)
        .ok_or(repo::Error::NotFound)?;
    if comment.deleted.is_none() {
        comment.deleted = Some(activity.clone());
    }
    Ok(())
}
