//! Client-side data layer for the fitness tracker backend.
//!
//! Every accessor takes an [`ApiClient`] and returns either the unwrapped
//! `data` of the backend envelope or a normalized [`Error`] whose message is
//! ready to show to a user.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod meals;
pub mod profile;

pub use config::ClientConfig;
pub use error::{Error, ErrorKind};
pub use http::ApiClient;
