use tracing::{info, instrument};

use crate::{
    error::{Error, OrFallback},
    http::{ApiClient, Envelope},
};

use super::dto::{
    ChangePasswordRequest, ProfilePayload, ProfileSetup, ProfileUpdate, Recommendations,
    SetupPayload, UserWithProfile,
};

const SETUP_FAILED: &str = "Profile setup failed. Please try again.";
const FETCH_FAILED: &str = "Failed to fetch profile. Please try again.";
const UPDATE_FAILED: &str = "Profile update failed. Please try again.";
const PASSWORD_FAILED: &str = "Password change failed. Please try again.";
const RECOMMENDATIONS_FAILED: &str = "Failed to load recommendations. Please try again.";

#[instrument(skip(api, data))]
pub async fn setup_profile(api: &ApiClient, data: &ProfileSetup) -> Result<UserWithProfile, Error> {
    let payload: SetupPayload = api
        .post("/api/profile/setup", data)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(SETUP_FAILED)?;

    info!(user_id = %payload.profile.user.id, "profile created");
    Ok(payload.profile)
}

#[instrument(skip(api))]
pub async fn get_profile(api: &ApiClient) -> Result<UserWithProfile, Error> {
    api.get::<ProfilePayload>("/api/profile/me")
        .await
        .and_then(Envelope::into_data)
        .map(UserWithProfile::from)
        .or_fallback(FETCH_FAILED)
}

/// Sends exactly the fields set on `changes`; the caller decides what changed.
#[instrument(skip(api, changes))]
pub async fn update_profile(
    api: &ApiClient,
    changes: &ProfileUpdate,
) -> Result<UserWithProfile, Error> {
    api.patch::<ProfilePayload, _>("/api/profile/update", changes)
        .await
        .and_then(Envelope::into_data)
        .map(UserWithProfile::from)
        .or_fallback(UPDATE_FAILED)
}

#[instrument(skip_all)]
pub async fn change_password(
    api: &ApiClient,
    current_password: &str,
    new_password: &str,
) -> Result<(), Error> {
    let body = ChangePasswordRequest {
        current_password,
        new_password,
    };
    api.post::<serde_json::Value, _>("/api/auth/change-password", &body)
        .await
        .and_then(Envelope::into_ack)
        .or_fallback(PASSWORD_FAILED)?;

    info!("password changed");
    Ok(())
}

#[instrument(skip(api))]
pub async fn get_recommendations(api: &ApiClient) -> Result<Recommendations, Error> {
    api.get("/api/profile/recommendations")
        .await
        .and_then(Envelope::into_data)
        .or_fallback(RECOMMENDATIONS_FAILED)
}
