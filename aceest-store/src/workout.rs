use aceest_model::{
    profile::FALLBACK_WEIGHT_KG,
    workout::{NewWorkout, WorkoutEntry, WorkoutLog},
};
use async_trait::async_trait;
use chrono::Local;
use log::{debug, warn};

use crate::store::Store;

#[mockall::automock]
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Prices the workout with the user's stored weight and appends it to
    /// the matching bucket.
    async fn add_workout(&self, registration_id: &str, workout: NewWorkout) -> WorkoutEntry;
    /// Returns the user's buckets, or three empty buckets for an unknown
    /// user.
    async fn fetch_workouts(&self, registration_id: &str) -> WorkoutLog;
    async fn count_workouts(&self) -> usize;
}

#[derive(Clone)]
pub struct WorkoutRepositoryImpl {
    store: Store,
}

impl WorkoutRepositoryImpl {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryImpl {
    async fn add_workout(&self, registration_id: &str, workout: NewWorkout) -> WorkoutEntry {
        let mut tables = self.store.lock().await;
        let weight_kg = match tables.users.get(registration_id) {
            Some(profile) => profile.weight_kg,
            None => {
                warn!(
                    "No profile for {}, assuming {} kg",
                    registration_id, FALLBACK_WEIGHT_KG
                );
                FALLBACK_WEIGHT_KG
            }
        };

        let category = workout.category;
        let entry = WorkoutEntry::new(workout, weight_kg, Local::now().naive_local());
        debug!("Storing {} entry {:?}", category, entry);
        tables
            .workouts
            .entry(registration_id.to_owned())
            .or_default()
            .push(category, entry.clone());
        entry
    }

    async fn fetch_workouts(&self, registration_id: &str) -> WorkoutLog {
        self.store
            .lock()
            .await
            .workouts
            .get(registration_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn count_workouts(&self) -> usize {
        self.store
            .lock()
            .await
            .workouts
            .values()
            .map(WorkoutLog::len)
            .sum()
    }
}
