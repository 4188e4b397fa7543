use aceest_model::{
    forms::WorkoutForm,
    responses::WorkoutResponse,
    summary::{Progress, Summary},
};
use aceest_store::workout::WorkoutRepository;
use actix_web::{get, post, web};
use log::info;

use crate::{error::ApiError, session::CurrentUser};

#[post("/add")]
async fn add_workout(
    user: CurrentUser,
    form: web::Json<WorkoutForm>,
    workouts: web::Data<dyn WorkoutRepository>,
) -> Result<web::Json<WorkoutResponse>, ApiError> {
    let workout = form.into_inner().validate()?;
    let entry = workouts.add_workout(&user.registration_id, workout).await;
    info!(
        "User {} logged {} minutes of {}",
        user.registration_id, entry.duration_minutes, entry.exercise
    );

    Ok(web::Json(WorkoutResponse {
        success: true,
        message: format!("{} added successfully!", entry.exercise),
        calories: entry.calories,
    }))
}

#[get("/summary")]
async fn summary(
    user: CurrentUser,
    workouts: web::Data<dyn WorkoutRepository>,
) -> web::Json<Summary> {
    let log = workouts.fetch_workouts(&user.registration_id).await;
    web::Json(Summary::from_log(&log))
}

#[get("/progress")]
async fn progress(
    user: CurrentUser,
    workouts: web::Data<dyn WorkoutRepository>,
) -> web::Json<Progress> {
    let log = workouts.fetch_workouts(&user.registration_id).await;
    web::Json(Progress::from_log(&log))
}
