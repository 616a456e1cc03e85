//! Driven port for user persistence.
//!
//! Adapters run exactly one store statement per call and report failures as
//! [`UserPersistenceError`]; they never interpret row counts.
use async_trait::async_trait;

use crate::domain::{RowsAffected, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No connection could be obtained or the connection dropped.
        Connection { message: String } => "user repository connection failed: {message}",
        /// The statement itself failed.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user ordered by identifier.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new row and return the store-generated identifier.
    ///
    /// `None` means the statement affected no row.
    async fn insert(&self, draft: &UserDraft) -> Result<Option<UserId>, UserPersistenceError>;

    /// Overwrite the fields of the row keyed by `user.id()`.
    async fn update(&self, user: &User) -> Result<RowsAffected, UserPersistenceError>;

    /// Remove the row keyed by `id`.
    async fn delete_by_id(&self, id: &UserId) -> Result<RowsAffected, UserPersistenceError>;
}
