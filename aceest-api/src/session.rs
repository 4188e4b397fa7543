use aceest_store::session::{SessionRepository, SessionToken};
use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    web, FromRequest, HttpRequest,
};
use futures::future::LocalBoxFuture;
use log::{debug, error};

use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "aceest_session";

/// Identity of the caller, resolved from the session cookie.
///
/// Using it as a handler argument gates the handler: requests without a
/// live session are rejected with [`ApiError::Unauthorized`].
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub registration_id: String,
    pub token: SessionToken,
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let sessions = req.app_data::<web::Data<dyn SessionRepository>>().cloned();
        let token = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| cookie.value().parse::<SessionToken>().ok());

        Box::pin(async move {
            let Some(sessions) = sessions else {
                error!("Session repository missing from application data");
                return Err(ApiError::Unauthorized);
            };
            let Some(token) = token else {
                debug!("Request carries no session token");
                return Err(ApiError::Unauthorized);
            };
            let registration_id = sessions
                .resolve(token)
                .await
                .ok_or(ApiError::Unauthorized)?;

            Ok(CurrentUser {
                registration_id,
                token,
            })
        })
    }
}

pub fn session_cookie(token: SessionToken) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
