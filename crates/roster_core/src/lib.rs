//! Core domain logic for Roster.
//! In-memory user records, mirrored configuration, and the batch transformer.

pub mod batch;
pub mod cache;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sequence;
pub mod service;

pub use batch::{
    double_all, double_value, process_batch, transform_each, BatchItem, BatchOutcome,
    DoubledBatch, ItemFailure, TransformError,
};
pub use cache::{process_config_cache, SharedConfigCache};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::config::{ConfigMap, ConfigValue};
pub use model::user::{User, UserId, UserValidationError};
pub use repo::user_repo::{InMemoryUserRepository, RepoError, RepoResult, UserRepository};
pub use sequence::{process_id_generator, IdGenerator, SequenceIdGenerator};
pub use service::user_service::UserService;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
