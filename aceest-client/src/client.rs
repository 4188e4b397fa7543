use aceest_model::{
    forms::{LoginForm, RegistrationForm, WorkoutForm},
    profile::{NewUser, UserProfile},
    responses::{HealthStatus, Metrics, RegistrationResponse, StatusResponse, WorkoutResponse},
    summary::{Progress, Summary},
    workout::NewWorkout,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not set up HTTP client")]
    SetupError,
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("login required")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid request: {0}")]
    RequestError(String),
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn register(&self, user: NewUser) -> Result<RegistrationResponse>;
    async fn login(&self, registration_id: &str) -> Result<StatusResponse>;
    async fn logout(&self) -> Result<StatusResponse>;
    async fn add_workout(&self, workout: NewWorkout) -> Result<WorkoutResponse>;
    async fn get_summary(&self) -> Result<Summary>;
    async fn get_progress(&self) -> Result<Progress>;
    async fn get_profile(&self) -> Result<UserProfile>;
    async fn get_health(&self) -> Result<HealthStatus>;
    async fn get_metrics(&self) -> Result<Metrics>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|_| Error::SetupError)?;
        Ok(Self {
            url: url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;
        let status = resp.status();
        debug!("{} {}", status, resp.url());

        if status.is_client_error() {
            let message = resp
                .json::<StatusResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            Err(client_error(status, message))
        } else if status.is_server_error() {
            Err(Error::InternalServerError)
        } else {
            resp.json().await.map_err(|_| Error::ResponseError)
        }
    }
}

/// Creates a client for the API at `url`. Sessions opened by `register` and
/// `login` are kept in the client's cookie store.
pub fn create(url: String) -> Result<impl Client> {
    ClientImpl::new(url)
}

fn client_error(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::CONFLICT => Error::Conflict(message),
        _ => Error::RequestError(message),
    }
}

#[async_trait]
impl Client for ClientImpl {
    async fn register(&self, user: NewUser) -> Result<RegistrationResponse> {
        self.send(
            self.client
                .post(self.endpoint("/register"))
                .json(&RegistrationForm::from(user)),
        )
        .await
    }

    async fn login(&self, registration_id: &str) -> Result<StatusResponse> {
        self.send(self.client.post(self.endpoint("/login")).json(&LoginForm {
            regn_id: Some(registration_id.to_owned()),
        }))
        .await
    }

    async fn logout(&self) -> Result<StatusResponse> {
        self.send(self.client.post(self.endpoint("/logout"))).await
    }

    async fn add_workout(&self, workout: NewWorkout) -> Result<WorkoutResponse> {
        self.send(
            self.client
                .post(self.endpoint("/api/workout/add"))
                .json(&WorkoutForm::from(workout)),
        )
        .await
    }

    async fn get_summary(&self) -> Result<Summary> {
        self.send(self.client.get(self.endpoint("/api/workout/summary")))
            .await
    }

    async fn get_progress(&self) -> Result<Progress> {
        self.send(self.client.get(self.endpoint("/api/workout/progress")))
            .await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        self.send(self.client.get(self.endpoint("/api/user/profile")))
            .await
    }

    async fn get_health(&self) -> Result<HealthStatus> {
        self.send(self.client.get(self.endpoint("/health"))).await
    }

    async fn get_metrics(&self) -> Result<Metrics> {
        self.send(self.client.get(self.endpoint("/metrics"))).await
    }
}
