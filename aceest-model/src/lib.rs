pub mod calculator;
#[cfg(feature = "serde")]
pub mod forms;
pub mod profile;
#[cfg(feature = "serde")]
pub mod responses;
pub mod summary;
pub mod validation;
pub mod workout;
