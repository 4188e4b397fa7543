pub mod error;
pub mod session;
pub mod store;
pub mod user;
pub mod workout;
