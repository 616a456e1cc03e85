//! Internal Diesel row structs.
//!
//! These never leave the persistence adapter; conversion to domain types
//! happens in the repository.

use diesel::prelude::*;

use super::schema::users;

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

/// Values for a new `users` row; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
}

/// Full replacement of a user's fields. An absent email clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
}
