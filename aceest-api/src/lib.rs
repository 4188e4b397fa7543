pub mod config;
pub mod error;
pub mod routes;
pub mod session;

use std::sync::Arc;

use aceest_store::{
    session::{SessionRepository, SessionRepositoryImpl},
    store::Store,
    user::{UserRepository, UserRepositoryImpl},
    workout::{WorkoutRepository, WorkoutRepositoryImpl},
};
use actix_web::web;

/// Repositories shared by every worker. Handlers receive them as
/// `web::Data<dyn ...Repository>`.
#[derive(Clone)]
pub struct Repositories {
    pub users: web::Data<dyn UserRepository>,
    pub workouts: web::Data<dyn WorkoutRepository>,
    pub sessions: web::Data<dyn SessionRepository>,
}

impl Repositories {
    pub fn new(
        users: Arc<dyn UserRepository>,
        workouts: Arc<dyn WorkoutRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            users: web::Data::from(users),
            workouts: web::Data::from(workouts),
            sessions: web::Data::from(sessions),
        }
    }

    pub fn in_memory(store: Store) -> Self {
        Self::new(
            Arc::new(UserRepositoryImpl::new(store.clone())),
            Arc::new(WorkoutRepositoryImpl::new(store)),
            Arc::new(SessionRepositoryImpl::new()),
        )
    }

    /// Registers the repositories and every route on `cfg`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.workouts.clone())
            .app_data(self.sessions.clone())
            .configure(routes::configure);
    }
}
