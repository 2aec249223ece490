//! Id sequencing services.
//!
//! # Responsibility
//! - Hand out strictly increasing user ids.
//! - Expose the process-wide counter shared by default-constructed stores.
//!
//! # Invariants
//! - A generator starts at zero and its first issued id is `1`.
//! - Each call to `next_id` advances the counter exactly once.
//! - Ids are unique across threads sharing one generator.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::model::user::UserId;

static PROCESS_ID_GENERATOR: Lazy<Arc<SequenceIdGenerator>> =
    Lazy::new(|| Arc::new(SequenceIdGenerator::new()));

/// Source of unique user ids.
pub trait IdGenerator: Send + Sync {
    /// Issues the next id.
    fn next_id(&self) -> UserId;

    /// Returns the most recently issued id, or `0` when none was issued.
    fn last_issued(&self) -> UserId;
}

/// Monotonic counter-backed id generator.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> UserId {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn last_issued(&self) -> UserId {
        self.counter.load(Ordering::SeqCst)
    }
}

/// Returns the process-wide id generator.
///
/// Never reset. Every store built with `UserService::new()` draws from it, so
/// ids stay unique across unrelated store instances.
pub fn process_id_generator() -> Arc<SequenceIdGenerator> {
    Arc::clone(&PROCESS_ID_GENERATOR)
}

#[cfg(test)]
mod tests {
    use super::{process_id_generator, IdGenerator, SequenceIdGenerator};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn first_id_is_one_and_ids_increase() {
        let ids = SequenceIdGenerator::new();
        assert_eq!(ids.last_issued(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.last_issued(), 2);
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        let ids = Arc::new(SequenceIdGenerator::new());
        let handles = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("worker thread should not panic") {
                assert!(seen.insert(id), "duplicate id issued: {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
        assert_eq!(ids.last_issued(), 1000);
    }

    #[test]
    fn process_generator_is_a_single_instance() {
        let a = process_id_generator();
        let b = process_id_generator();
        assert!(Arc::ptr_eq(&a, &b));

        let first = a.next_id();
        let second = b.next_id();
        assert!(second > first);
    }
}
