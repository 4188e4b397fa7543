mod auth;
mod monitoring;
mod user;
mod workout;

use aceest_model::validation::ValidationError;
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

use crate::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        ApiError::from(ValidationError::MalformedBody(err.to_string())).into()
    }))
    .service(auth::register)
    .service(auth::login)
    .service(auth::logout)
    .service(
        web::scope("/api/workout")
            .service(workout::add_workout)
            .service(workout::summary)
            .service(workout::progress),
    )
    .service(web::scope("/api/user").service(user::profile))
    .service(monitoring::health)
    .service(monitoring::metrics)
    .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::RouteNotFound)
}
