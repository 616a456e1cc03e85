//! Diesel table definitions.
//!
//! Kept in sync with `backend/migrations` by hand.

diesel::table! {
    /// Registered users. `id` is a `BIGSERIAL` assigned on insert.
    users (id) {
        id -> Int8,
        /// Display name, at most 64 characters.
        name -> Varchar,
        /// Optional contact address, at most 254 characters.
        email -> Nullable<Varchar>,
    }
}
