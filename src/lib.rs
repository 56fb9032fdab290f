//! Billing and inventory ledger for a construction materials distributor.
//!
//! The crate is organized in three layers following hexagonal architecture:
//! - `domain`: entities, value objects, ports and services holding the
//!   business rules (line-item aggregation, tax/total derivation, payment
//!   reconciliation, order fulfillment, role-based access).
//! - `application`: use cases exposing the domain to a UI layer through
//!   plain-data commands and responses.
//! - `infrastructure`: configuration, in-memory persistence and demo seed
//!   data. All state lives in memory; there is no database or network I/O.

pub mod application;
pub mod domain;
pub mod infrastructure;
