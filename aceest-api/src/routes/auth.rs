use aceest_model::{
    forms::{LoginForm, RegistrationForm},
    responses::{RegistrationResponse, StatusResponse},
};
use aceest_store::{session::SessionRepository, user::UserRepository};
use actix_web::{post, route, web, HttpResponse};
use log::info;

use crate::{
    error::ApiError,
    session::{removal_cookie, session_cookie, CurrentUser},
};

#[post("/register")]
async fn register(
    form: web::Json<RegistrationForm>,
    current: Option<CurrentUser>,
    users: web::Data<dyn UserRepository>,
    sessions: web::Data<dyn SessionRepository>,
) -> Result<HttpResponse, ApiError> {
    let user = form.into_inner().validate()?;
    let profile = users.register(user).await?;
    if let Some(current) = current {
        sessions.close(current.token).await;
    }
    let token = sessions.open(&profile.registration_id).await;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(RegistrationResponse {
            success: true,
            message: "Registration successful!".to_owned(),
            bmi: profile.bmi,
            bmr: profile.bmr,
        }))
}

#[post("/login")]
async fn login(
    form: web::Json<LoginForm>,
    current: Option<CurrentUser>,
    users: web::Data<dyn UserRepository>,
    sessions: web::Data<dyn SessionRepository>,
) -> Result<HttpResponse, ApiError> {
    let registration_id = form.into_inner().validate()?;
    let profile = users.fetch_user(&registration_id).await?;
    if let Some(current) = current {
        sessions.close(current.token).await;
    }
    let token = sessions.open(&profile.registration_id).await;
    info!("User {} logged in", profile.registration_id);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(StatusResponse::ok("Login successful!")))
}

#[route("/logout", method = "GET", method = "POST")]
async fn logout(
    user: Option<CurrentUser>,
    sessions: web::Data<dyn SessionRepository>,
) -> HttpResponse {
    if let Some(user) = user {
        sessions.close(user.token).await;
        info!("User {} logged out", user.registration_id);
    }

    HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(StatusResponse::ok("Logged out successfully"))
}
