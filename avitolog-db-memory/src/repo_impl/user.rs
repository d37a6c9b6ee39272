use super::*;

macro_rules! impl_user_repo {
    ($($db:ty),+) => {$(
        impl UserRepo for $db {
            fn create_user(&self, user: &User) -> Result<()> {
                self.write(|t| create_user(t, user))
            }
            fn update_user(&self, user: &User) -> Result<()> {
                self.write(|t| update_user(t, user))
            }

            fn get_user(&self, id: &str) -> Result<User> {
                self.read(|t| get_user(t, id))
            }
            fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
                self.read(|t| Ok(find_by_username(t, username).cloned()))
            }

            fn all_users(&self) -> Result<Vec<User>> {
                self.read(|t| Ok(t.users.clone()))
            }
            fn count_users(&self) -> Result<usize> {
                self.read(|t| Ok(t.users.len()))
            }
        }
    )+};
}

impl_user_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

fn find_by_username<'t>(tables: &'t Tables, username: &str) -> Option<&'t User> {
    tables.users.iter().find(|u| u.username == username)
}

fn create_user(tables: &mut Tables, user: &User) -> Result<()> {
    if tables.users.iter().any(|u| u.id == user.id)
        || find_by_username(tables, &user.username).is_some()
    {
        return Err(repo::Error::AlreadyExists);
    }
    tables.users.push(user.clone());
    Ok(())
}

fn update_user(tables: &mut Tables, user: &User) -> Result<()> {
    let existing = tables
        .users
        .iter_mut()
        .find(|u| u.id == user.id)
        .ok_or(repo::Error::NotFound)?;
    *existing = user.clone();
    Ok(())
}

fn get_user(tables: &Tables, id: &str) -> Result<User> {
    tables
        .users
        .iter()
        .find(|u| u.id.as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Connections;
    use avitolog_entities::builders::*;

    #[test]
    fn reject_duplicate_usernames() {
        let connections = Connections::init();
        let db = connections.exclusive().unwrap();
        db.create_user(&User::build().username("ivan").finish())
            .unwrap();
        let err = db
            .create_user(&User::build().username("ivan").finish())
            .unwrap_err();
        assert!(matches!(err, repo::Error::AlreadyExists));
        assert_eq!(1, db.count_users().unwrap());
    }

    #[test]
    fn update_existing_user() {
        let connections = Connections::init();
        let db = connections.exclusive().unwrap();
        let mut user = User::build().id("u1").username("ivan").finish();
        db.create_user(&user).unwrap();
        user.role = Role::Staff;
        db.update_user(&user).unwrap();
        assert_eq!(Role::Staff, db.get_user("u1").unwrap().role);
        assert!(db.try_get_user_by_username("petr").unwrap().is_none());
    }

    #[test]
    fn update_missing_user() {
        let connections = Connections::init();
        let db = connections.exclusive().unwrap();
        let user = User::build().username("ivan").finish();
        assert!(matches!(
            db.update_user(&user),
            Err(repo::Error::NotFound)
        ));
    }
}
