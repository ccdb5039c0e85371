//! Per-project mutual exclusion for diagnosis runs.
//!
//! Two concurrent runs against the same project would interleave their
//! delete/create/update steps and leave a suggestion set belonging to
//! neither run. [`RunLocks`] hands out one async mutex per project id so
//! runs for the same project queue up while runs for different projects
//! proceed concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use rigor_core::types::DbId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-project run locks.
///
/// Entries are created on first use and kept for the process lifetime;
/// the registry is bounded by the number of distinct projects diagnosed.
#[derive(Default)]
pub struct RunLocks {
    locks: Mutex<HashMap<DbId, Arc<Mutex<()>>>>,
}

impl RunLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for one project, waiting if a run is in flight.
    ///
    /// The registry mutex is only held while looking up the entry, never
    /// across the await on the project lock itself.
    pub async fn acquire(&self, project_id: DbId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(project_id).or_default())
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn same_project_serializes() {
        let locks = Arc::new(RunLocks::new());
        let in_flight = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let in_flight = Arc::clone(&in_flight);
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire(1).await;
                let now = in_flight.fetch_add(1, Ordering::SeqCst);
                assert_eq!(now, 0, "two runs held the same project lock");
                tokio::task::yield_now().await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn different_projects_do_not_block_each_other() {
        let locks = RunLocks::new();
        let _one = locks.acquire(1).await;
        // Must complete immediately even though project 1 is locked.
        let _two = locks.acquire(2).await;
    }
}
