//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see the driving
//! ports, so they can be exercised against in-memory implementations.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Build state from separate read and write ports.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Build state from one service implementing both ports.
    ///
    /// # Examples
    /// ```ignore
    /// let service = Arc::new(UserDirectoryService::new(Arc::new(repository)));
    /// let state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        Self {
            users: service.clone(),
            users_command: service,
        }
    }
}
