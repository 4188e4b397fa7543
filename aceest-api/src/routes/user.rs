use aceest_model::profile::UserProfile;
use aceest_store::user::UserRepository;
use actix_web::{get, web};

use crate::{error::ApiError, session::CurrentUser};

#[get("/profile")]
async fn profile(
    user: CurrentUser,
    users: web::Data<dyn UserRepository>,
) -> Result<web::Json<UserProfile>, ApiError> {
    Ok(web::Json(users.fetch_user(&user.registration_id).await?))
}
