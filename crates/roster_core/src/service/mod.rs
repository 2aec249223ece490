//! Record store use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, id sequencing and repository writes.
//! - Keep callers decoupled from collection and cache details.

pub mod user_service;
