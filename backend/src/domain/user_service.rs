//! User directory service.
//!
//! Implements both driving ports by forwarding each call to the
//! [`UserRepository`] and translating persistence failures into domain
//! errors. No validation happens here beyond what the types already enforce.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    Created, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, RowsAffected, User, UserDraft, UserId};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Pass-through service over a user repository.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    user_repo: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a service backed by `user_repo`.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.user_repo
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<Created, Error> {
        let inserted = self
            .user_repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;

        let Some(id) = inserted else {
            debug!("user insert affected no rows");
            return Ok(Created {
                rows: RowsAffected::NONE,
                user: None,
            });
        };

        debug!(user_id = %id, "user created");
        Ok(Created {
            rows: RowsAffected::ONE,
            user: Some(draft.into_user(id)),
        })
    }

    async fn update_user(&self, user: User) -> Result<RowsAffected, Error> {
        let rows = self
            .user_repo
            .update(&user)
            .await
            .map_err(map_repository_error)?;
        debug!(user_id = %user.id(), rows = rows.get(), "user update applied");
        Ok(rows)
    }

    async fn delete_user(&self, id: UserId) -> Result<RowsAffected, Error> {
        let rows = self
            .user_repo
            .delete_by_id(&id)
            .await
            .map_err(map_repository_error)?;
        debug!(user_id = %id, rows = rows.get(), "user delete applied");
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
