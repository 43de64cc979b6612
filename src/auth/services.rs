use tracing::{debug, info, instrument, warn};

use crate::{
    error::{Error, OrFallback},
    http::{ApiClient, Envelope},
};

use super::dto::{AuthStatus, LoginRequest, RegisterRequest, User, UserPayload, VerifyPayload};

const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const LOGIN_FAILED: &str = "Invalid email or password";

#[instrument(skip(api, password))]
pub async fn register(
    api: &ApiClient,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<User, Error> {
    let body = RegisterRequest {
        email,
        password,
        full_name,
    };
    let payload: UserPayload = api
        .post("/api/auth/register", &body)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(REGISTER_FAILED)?;

    info!(user_id = %payload.user.id, "user registered");
    Ok(payload.user)
}

/// Logs in; the backend answers with an HTTP-only session cookie kept by the client.
#[instrument(skip(api, password))]
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<User, Error> {
    let payload: UserPayload = api
        .post("/api/auth/login", &LoginRequest { email, password })
        .await
        .and_then(Envelope::into_data)
        .or_fallback(LOGIN_FAILED)?;

    info!(user_id = %payload.user.id, "user logged in");
    Ok(payload.user)
}

/// Probes the session cookie. Used for routing decisions, so it never fails.
#[instrument(skip(api))]
pub async fn verify_auth(api: &ApiClient) -> AuthStatus {
    match api
        .get::<VerifyPayload>("/api/auth/verify")
        .await
        .and_then(Envelope::into_data)
    {
        Ok(VerifyPayload {
            authenticated: true,
            user: Some(user),
        }) => AuthStatus::signed_in(user),
        Ok(_) => AuthStatus::signed_out(),
        Err(e) => {
            debug!(error = %e, "session not verified");
            AuthStatus::signed_out()
        }
    }
}

/// Best-effort; the caller moves on regardless of the outcome.
#[instrument(skip(api))]
pub async fn logout(api: &ApiClient) {
    let res = api
        .post_empty::<serde_json::Value>("/api/auth/logout")
        .await
        .and_then(Envelope::into_ack);
    if let Err(e) = res {
        warn!(error = %e, "logout failed");
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::error::ErrorKind;
    use crate::http::testing::{mock_backend, unreachable_backend};

    const USER_ID: &str = "7f9c24e8-3b12-4fef-91e0-0f0a1c2d3e4f";

    fn user_json() -> Value {
        json!({ "id": USER_ID, "email": "ana@example.com", "fullName": "Ana Lima" })
    }

    #[tokio::test]
    async fn login_returns_nested_user_unmodified() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|| async { Json(json!({ "success": true, "data": { "user": user_json() } })) }),
        );
        let api = mock_backend(router).await;

        let user = login(&api, "ana@example.com", "hunter22").await.expect("login");
        assert_eq!(serde_json::to_value(&user).unwrap(), user_json());
    }

    #[tokio::test]
    async fn opaque_user_ids_are_kept_as_sent() {
        let router = Router::new()
            .route(
                "/api/auth/login",
                post(|| async {
                    Json(json!({
                        "success": true,
                        "data": { "user": { "id": "clx9a2b3c0000", "email": "ana@example.com", "fullName": "Ana Lima" } }
                    }))
                }),
            )
            .route(
                "/api/auth/verify",
                get(|| async {
                    Json(json!({
                        "success": true,
                        "data": { "authenticated": true, "user": { "id": "42", "email": "ana@example.com", "fullName": "Ana Lima" } }
                    }))
                }),
            );
        let api = mock_backend(router).await;

        let user = login(&api, "ana@example.com", "hunter22").await.expect("login");
        assert_eq!(user.id, "clx9a2b3c0000");

        let status = verify_auth(&api).await;
        assert!(status.authenticated);
        assert_eq!(status.user.expect("user").id, "42");
    }

    #[tokio::test]
    async fn login_posts_credentials() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "email": "ana@example.com", "password": "hunter22" }));
                Json(json!({ "success": true, "data": { "user": user_json() } }))
            }),
        );
        let api = mock_backend(router).await;
        login(&api, "ana@example.com", "hunter22").await.expect("login");
    }

    #[tokio::test]
    async fn login_prefers_server_message() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "success": false, "message": "Account locked" })),
                )
            }),
        );
        let api = mock_backend(router).await;

        let err = login(&api, "ana@example.com", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Account locked");
        assert_eq!(err.kind(), ErrorKind::Server { status: Some(401) });
    }

    #[tokio::test]
    async fn login_falls_back_to_error_field() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Email is required" })),
                )
            }),
        );
        let api = mock_backend(router).await;

        let err = login(&api, "", "x").await.unwrap_err();
        assert_eq!(err.message(), "Email is required");
    }

    #[tokio::test]
    async fn register_non_success_envelope_uses_its_message() {
        let router = Router::new().route(
            "/api/auth/register",
            post(|| async { Json(json!({ "success": false, "message": "X" })) }),
        );
        let api = mock_backend(router).await;

        let err = register(&api, "a@b.io", "longenough", "A B").await.unwrap_err();
        assert_eq!(err.to_string(), "X");
    }

    #[tokio::test]
    async fn register_sends_camel_case_full_name() {
        let router = Router::new().route(
            "/api/auth/register",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["fullName"], "Ana Lima");
                Json(json!({ "success": true, "data": { "user": user_json() } }))
            }),
        );
        let api = mock_backend(router).await;

        let user = register(&api, "ana@example.com", "hunter22", "Ana Lima")
            .await
            .expect("register");
        assert_eq!(user.full_name, "Ana Lima");
    }

    #[tokio::test]
    async fn network_failures_use_distinct_fallbacks() {
        let api = unreachable_backend();

        let reg = register(&api, "a@b.io", "pw", "A").await.unwrap_err();
        let log = login(&api, "a@b.io", "pw").await.unwrap_err();

        assert_eq!(reg.to_string(), REGISTER_FAILED);
        assert_eq!(log.to_string(), LOGIN_FAILED);
        assert_ne!(reg.to_string(), log.to_string());
        assert_eq!(log.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn verify_reports_signed_in_user() {
        let router = Router::new().route(
            "/api/auth/verify",
            get(|| async {
                Json(json!({ "success": true, "data": { "authenticated": true, "user": user_json() } }))
            }),
        );
        let api = mock_backend(router).await;

        let status = verify_auth(&api).await;
        assert!(status.authenticated);
        assert_eq!(status.user.expect("user").email, "ana@example.com");
    }

    #[tokio::test]
    async fn verify_never_fails() {
        assert_eq!(verify_auth(&unreachable_backend()).await, AuthStatus::signed_out());

        let rejected = Router::new().route(
            "/api/auth/verify",
            get(|| async { Json(json!({ "success": false })) }),
        );
        assert_eq!(verify_auth(&mock_backend(rejected).await).await, AuthStatus::signed_out());

        let anonymous = Router::new().route(
            "/api/auth/verify",
            get(|| async { Json(json!({ "success": true, "data": { "authenticated": false } })) }),
        );
        assert_eq!(verify_auth(&mock_backend(anonymous).await).await, AuthStatus::signed_out());

        let unauthorized = Router::new().route(
            "/api/auth/verify",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "success": false }))) }),
        );
        assert_eq!(verify_auth(&mock_backend(unauthorized).await).await, AuthStatus::signed_out());

        let garbage = Router::new().route("/api/auth/verify", get(|| async { "not json" }));
        assert_eq!(verify_auth(&mock_backend(garbage).await).await, AuthStatus::signed_out());
    }

    #[tokio::test]
    async fn logout_swallows_failures() {
        logout(&unreachable_backend()).await;

        let router = Router::new().route(
            "/api/auth/logout",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        logout(&mock_backend(router).await).await;
    }
}
