//! Test helpers for inbound HTTP components.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{RowsAffected, User, UserDraft, UserDirectoryService, UserId};
use crate::inbound::http::state::HttpState;

/// How the in-memory repository behaves on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryMode {
    #[default]
    Healthy,
    /// Inserts report zero affected rows.
    InsertAffectsNothing,
    /// Every call fails as if the pool were exhausted.
    Unreachable,
}

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// Ordered in-memory stand-in for the database adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    mode: RepositoryMode,
    rows: Mutex<Rows>,
}

impl InMemoryUserRepository {
    /// Empty repository behaving according to `mode`.
    pub fn with_mode(mode: RepositoryMode) -> Self {
        Self {
            mode,
            rows: Mutex::default(),
        }
    }

    fn check_reachable(&self) -> Result<(), UserPersistenceError> {
        match self.mode {
            RepositoryMode::Unreachable => Err(UserPersistenceError::connection(
                "timed out waiting for connection",
            )),
            _ => Ok(()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Rows> {
        self.rows.lock().expect("user rows lock")
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.check_reachable()?;
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        self.check_reachable()?;
        Ok(self.lock().users.get(&id.get()).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<Option<UserId>, UserPersistenceError> {
        self.check_reachable()?;
        if self.mode == RepositoryMode::InsertAffectsNothing {
            return Ok(None);
        }
        let mut rows = self.lock();
        rows.next_id += 1;
        let id = UserId::new(rows.next_id).expect("sequence is positive");
        rows.users.insert(id.get(), draft.clone().into_user(id));
        Ok(Some(id))
    }

    async fn update(&self, user: &User) -> Result<RowsAffected, UserPersistenceError> {
        self.check_reachable()?;
        let mut rows = self.lock();
        match rows.users.get_mut(&user.id().get()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(RowsAffected::ONE)
            }
            None => Ok(RowsAffected::NONE),
        }
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<RowsAffected, UserPersistenceError> {
        self.check_reachable()?;
        let removed = self.lock().users.remove(&id.get());
        Ok(if removed.is_some() {
            RowsAffected::ONE
        } else {
            RowsAffected::NONE
        })
    }
}

/// HTTP state backed by the real service over an in-memory repository.
pub fn in_memory_state(mode: RepositoryMode) -> HttpState {
    let repository = Arc::new(InMemoryUserRepository::with_mode(mode));
    HttpState::from_service(Arc::new(UserDirectoryService::new(repository)))
}
