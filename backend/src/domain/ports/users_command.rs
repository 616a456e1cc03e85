//! Driving port for mutating users.

use async_trait::async_trait;

use crate::domain::{Error, RowsAffected, User, UserDraft, UserId};

/// Outcome of persisting a new user.
///
/// `user` is present exactly when `rows` is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub rows: RowsAffected,
    pub user: Option<User>,
}

/// Write-side use cases for the user directory.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist `draft`, attaching the identifier the store assigns.
    async fn create_user(&self, draft: UserDraft) -> Result<Created, Error>;

    /// Overwrite the stored fields of `user`; zero rows means no such id.
    async fn update_user(&self, user: User) -> Result<RowsAffected, Error>;

    /// Remove the user with `id`; zero rows means no such id.
    async fn delete_user(&self, id: UserId) -> Result<RowsAffected, Error>;
}
