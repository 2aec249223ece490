//! Domain model for user records and store configuration.
//!
//! # Responsibility
//! - Define the canonical record shape owned by the record store.
//! - Define the value type carried by configuration entries.
//!
//! # Invariants
//! - Every `User` carries an id issued by an `IdGenerator`.
//! - A `User` never holds a negative age.

pub mod config;
pub mod user;
