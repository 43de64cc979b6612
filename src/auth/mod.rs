mod dto;
mod services;

pub use dto::{AuthStatus, User};
pub use services::{login, logout, register, verify_auth};
