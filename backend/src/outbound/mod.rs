//! Outbound adapters implementing domain ports against infrastructure.
//!
//! Only PostgreSQL persistence lives here. Adapters translate between domain
//! types and storage representations and carry no business rules.

pub mod persistence;
