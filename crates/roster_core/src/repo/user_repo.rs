//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Append records and answer exact-name lookups.
//! - Surface semantic errors instead of silently accepting bad input.
//!
//! # Invariants
//! - Lookups scan in insertion order and return the first match.
//! - Stored ids strictly increase in insertion order.

use crate::model::user::{User, UserId, UserValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by record store write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Caller-supplied field failed validation.
    InvalidArgument(UserValidationError),
    /// Id generator handed out an id not greater than the last stored one.
    NonMonotonicId { id: UserId, last: UserId },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::NonMonotonicId { id, last } => {
                write!(f, "user id {id} is not greater than last stored id {last}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::NonMonotonicId { .. } => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

/// Storage contract for user records.
pub trait UserRepository {
    fn insert_user(&mut self, user: User) -> RepoResult<UserId>;
    fn find_by_name(&self, name: &str) -> Option<&User>;
    fn list_users(&self) -> &[User];
}

/// Growable, insertion-ordered user collection.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert_user(&mut self, user: User) -> RepoResult<UserId> {
        if let Some(last) = self.users.last() {
            if user.id <= last.id {
                return Err(RepoError::NonMonotonicId {
                    id: user.id,
                    last: last.id,
                });
            }
        }

        let id = user.id;
        self.users.push(user);
        Ok(id)
    }

    fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    fn list_users(&self) -> &[User] {
        &self.users
    }
}
