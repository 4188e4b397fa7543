use std::sync::Arc;

use aceest_model::{profile::UserProfile, workout::WorkoutLog};
use rustc_hash::FxHashMap;
use tokio::sync::{Mutex, MutexGuard};

/// Profiles and workout logs, keyed by registration ID.
///
/// Both maps sit behind one lock so that a registration can check for an
/// existing profile and create the profile together with its buckets in a
/// single step.
#[derive(Debug, Default)]
pub struct Tables {
    pub users: FxHashMap<String, UserProfile>,
    pub workouts: FxHashMap<String, WorkoutLog>,
}

/// Handle to the process-wide in-memory store. Cloning shares the same
/// tables.
#[derive(Clone, Debug, Default)]
pub struct Store {
    inner: Arc<Mutex<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().await
    }

    /// Drops every profile and workout.
    pub async fn clear(&self) {
        let mut tables = self.lock().await;
        tables.users.clear();
        tables.workouts.clear();
    }
}
