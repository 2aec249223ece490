//! Record store service.
//!
//! # Responsibility
//! - Provide add/find entry points over a user repository.
//! - Own the store configuration mapping and mirror updates into a side-cache.
//!
//! # Invariants
//! - Age validation runs before an id is drawn; a rejected add leaves the
//!   collection and the generator untouched.
//! - Every config update lands in both the local mapping and the side-cache.
//! - `UserService::new()` couples the store to process-wide state; use
//!   `with_dependencies` for an isolated store.

use crate::cache::{process_config_cache, SharedConfigCache};
use crate::model::config::{default_config, ConfigMap, ConfigValue};
use crate::model::user::{validate_age, User};
use crate::repo::user_repo::{InMemoryUserRepository, RepoResult, UserRepository};
use crate::sequence::{process_id_generator, IdGenerator, SequenceIdGenerator};
use log::{debug, warn};
use std::sync::Arc;

/// Record store over a user repository plus a configuration mapping.
pub struct UserService<R: UserRepository> {
    repo: R,
    ids: Arc<dyn IdGenerator>,
    config: ConfigMap,
    side_cache: SharedConfigCache,
}

impl UserService<InMemoryUserRepository> {
    /// Creates an in-memory store wired to the process-wide counter and
    /// side-cache.
    pub fn new() -> Self {
        Self::with_dependencies(
            InMemoryUserRepository::new(),
            process_id_generator(),
            process_config_cache(),
        )
    }

    /// Creates an in-memory store with its own counter and side-cache.
    pub fn isolated() -> Self {
        Self::with_dependencies(
            InMemoryUserRepository::new(),
            Arc::new(SequenceIdGenerator::new()),
            SharedConfigCache::new(),
        )
    }
}

impl Default for UserService<InMemoryUserRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UserRepository> UserService<R> {
    /// Creates a store from explicitly injected collaborators.
    pub fn with_dependencies(
        repo: R,
        ids: Arc<dyn IdGenerator>,
        side_cache: SharedConfigCache,
    ) -> Self {
        Self {
            repo,
            ids,
            config: default_config(),
            side_cache,
        }
    }

    /// Validates and appends a new user, returning the created record.
    ///
    /// # Errors
    /// - `RepoError::InvalidArgument` when `age` is negative or exceeds `u32`.
    /// - `RepoError::NonMonotonicId` when the injected generator misbehaves.
    pub fn add_user(&mut self, name: impl Into<String>, age: i64) -> RepoResult<User> {
        let age = validate_age(age).inspect_err(|err| {
            warn!("event=user_add module=service status=rejected reason=\"{err}\"");
        })?;

        let user = User::new(self.ids.next_id(), name, age);
        self.repo.insert_user(user.clone())?;
        debug!(
            "event=user_add module=service status=ok id={} count={}",
            user.id,
            self.repo.list_users().len()
        );
        Ok(user)
    }

    /// Returns the first user in insertion order whose name matches exactly.
    pub fn find_user(&self, name: &str) -> Option<User> {
        self.repo.find_by_name(name).cloned()
    }

    /// Sets `key -> value` locally and in the side-cache.
    ///
    /// The side-cache may be shared with unrelated stores; they all observe
    /// this write.
    pub fn update_config(&mut self, key: impl Into<String>, value: ConfigValue) {
        let key = key.into();
        self.config.insert(key.clone(), value.clone());
        self.side_cache.set(key.as_str(), value);
        debug!("event=config_update module=service status=ok key={key} mirrored=side_cache");
    }

    pub fn config(&self, key: &str) -> Option<&ConfigValue> {
        self.config.get(key)
    }

    pub fn config_snapshot(&self) -> ConfigMap {
        self.config.clone()
    }

    pub fn users(&self) -> &[User] {
        self.repo.list_users()
    }

    pub fn user_count(&self) -> usize {
        self.repo.list_users().len()
    }

    /// Side-cache handle this store mirrors config updates into.
    pub fn side_cache(&self) -> &SharedConfigCache {
        &self.side_cache
    }
}
