#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("User already registered")]
    AlreadyRegistered(String),
    #[error("User not found. Please register.")]
    UserNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
