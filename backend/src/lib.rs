//! User directory service library.
//!
//! Layout follows a hexagonal split: `domain` holds the entity, ports and
//! service; `inbound::http` adapts actix-web requests onto the driving ports;
//! `outbound::persistence` implements the repository port with Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
