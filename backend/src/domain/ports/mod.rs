//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`) are called by inbound
//! adapters. The driven port (`UserRepository`) is implemented by outbound
//! adapters and exposes a typed error so failures map predictably.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::{Created, UsersCommand};
pub use users_query::UsersQuery;
