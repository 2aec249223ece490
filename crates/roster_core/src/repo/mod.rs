//! Repository layer for user records.
//!
//! # Responsibility
//! - Define the storage contract the record store writes through.
//! - Keep collection details out of service orchestration.
//!
//! # Invariants
//! - Repositories preserve insertion order.
//! - Repositories reject ids that do not strictly increase.

pub mod user_repo;
