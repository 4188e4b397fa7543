use aceest_model::{responses::StatusResponse, validation::ValidationError};
use aceest_store::error::StoreError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("User already registered")]
    Conflict(String),
    #[error("User not found. Please register.")]
    UserNotFound(String),
    #[error("Not found")]
    RouteNotFound,
    #[error("Login required")]
    Unauthorized,
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::AlreadyRegistered(id) => ApiError::Conflict(id),
            StoreError::UserNotFound(id) => ApiError::UserNotFound(id),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UserNotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(StatusResponse::failure(self.to_string()))
    }
}
