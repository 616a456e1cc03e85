//! PostgreSQL-backed `UserRepository` using Diesel.
//!
//! Each method checks out one pooled connection and runs exactly one bound
//! statement. Row counts are passed through untouched; deciding whether zero
//! rows is an error belongs to the caller.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{RowsAffected, User, UserDraft, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Repository issuing its statements through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    User::try_from_parts(row.id, row.name, row.email).map_err(|err| {
        debug!(user_id = id, error = %err, "stored user row violates domain rules");
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    })
}

fn inserted_id(raw: i64) -> Result<UserId, UserPersistenceError> {
    UserId::new(raw).map_err(|err| UserPersistenceError::query(format!("generated id {raw}: {err}")))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn insert(&self, draft: &UserDraft) -> Result<Option<UserId>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewUserRow {
            name: draft.name().as_ref(),
            email: draft.email().map(AsRef::as_ref),
        };

        let id: Option<i64> = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(users::id)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        id.map(inserted_id).transpose()
    }

    async fn update(&self, user: &User) -> Result<RowsAffected, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = UserUpdate {
            name: user.name().as_ref(),
            email: user.email().map(AsRef::as_ref),
        };

        let rows = diesel::update(users::table.filter(users::id.eq(user.id().get())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(RowsAffected::from(rows))
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<RowsAffected, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = diesel::delete(users::table.filter(users::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(RowsAffected::from(rows))
    }
}
