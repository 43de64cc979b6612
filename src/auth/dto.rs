use serde::{Deserialize, Serialize};

/// Account as the backend exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// Request body for user registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` of register/login responses.
#[derive(Debug, Deserialize)]
pub(crate) struct UserPayload {
    pub user: User,
}

/// `data` of `/api/auth/verify`.
#[derive(Debug, Deserialize)]
pub(crate) struct VerifyPayload {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// Session check result. Never an error: failures read as signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl AuthStatus {
    pub fn signed_in(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}
