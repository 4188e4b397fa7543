use aceest_model::{
    profile::{NewUser, UserProfile},
    workout::WorkoutLog,
};
use async_trait::async_trait;
use chrono::Local;
use log::{debug, info, warn};

use crate::{
    error::{Result, StoreError},
    store::Store,
};

#[mockall::automock]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the profile and its empty workout buckets, failing if the
    /// registration ID is taken.
    async fn register(&self, user: NewUser) -> Result<UserProfile>;
    async fn fetch_user(&self, registration_id: &str) -> Result<UserProfile>;
    async fn count_users(&self) -> usize;
}

#[derive(Clone)]
pub struct UserRepositoryImpl {
    store: Store,
}

impl UserRepositoryImpl {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn register(&self, user: NewUser) -> Result<UserProfile> {
        let mut tables = self.store.lock().await;
        if tables.users.contains_key(&user.registration_id) {
            warn!("Registration ID {} is already taken", user.registration_id);
            return Err(StoreError::AlreadyRegistered(user.registration_id));
        }

        let profile = UserProfile::new(user, Local::now().naive_local());
        debug!("Storing profile {:?}", profile);
        tables
            .workouts
            .insert(profile.registration_id.clone(), WorkoutLog::new());
        tables
            .users
            .insert(profile.registration_id.clone(), profile.clone());

        info!("Registered user {}", profile.registration_id);
        Ok(profile)
    }

    async fn fetch_user(&self, registration_id: &str) -> Result<UserProfile> {
        self.store
            .lock()
            .await
            .users
            .get(registration_id)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(registration_id.to_owned()))
    }

    async fn count_users(&self) -> usize {
        self.store.lock().await.users.len()
    }
}
