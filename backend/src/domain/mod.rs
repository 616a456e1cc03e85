//! Domain entities, ports and services.
//!
//! Purpose: keep the user directory's types and use cases free of transport
//! and persistence concerns. Adapters in `inbound` and `outbound` depend on
//! this module, never the reverse.
//!
//! Public surface:
//! - `User`, `UserDraft` and their field newtypes.
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request correlation identifier.
//! - `UserDirectoryService`: implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod rows_affected;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::rows_affected::RowsAffected;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, User, UserDraft, UserId, UserName, UserValidationError};
pub use self::user_service::UserDirectoryService;
