use aceest_model::responses::{HealthStatus, Metrics};
use aceest_store::{user::UserRepository, workout::WorkoutRepository};
use actix_web::{get, web};
use chrono::Local;

const VERSION: &str = "2.0";

#[get("/health")]
async fn health() -> web::Json<HealthStatus> {
    web::Json(HealthStatus {
        status: "healthy".to_owned(),
        timestamp: Local::now().naive_local(),
        version: VERSION.to_owned(),
    })
}

#[get("/metrics")]
async fn metrics(
    users: web::Data<dyn UserRepository>,
    workouts: web::Data<dyn WorkoutRepository>,
) -> web::Json<Metrics> {
    web::Json(Metrics {
        total_users: users.count_users().await,
        total_workouts: workouts.count_workouts().await,
        timestamp: Local::now().naive_local(),
    })
}
