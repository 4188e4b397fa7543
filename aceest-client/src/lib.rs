mod client;
pub mod import;

pub use client::{create, Client, ClientImpl, Error, MockClient};
