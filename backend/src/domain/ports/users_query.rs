//! Driving port for reading users.
//!
//! Inbound adapters depend on this trait rather than on the repository so
//! handlers stay ignorant of persistence.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use cases for the user directory.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user ordered by identifier; empty when none exist.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The user with `id`, or `None` when absent.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
