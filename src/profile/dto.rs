use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    GainMuscle,
    Maintain,
    GetFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    None,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    Halal,
}

/// Biometrics and preferences, one-to-one with a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub target_weight_kg: Option<f64>,
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_step_goal: Option<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A user merged with their (possibly missing) profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithProfile {
    #[serde(flatten)]
    pub user: User,
    pub profile: Option<UserProfile>,
}

/// `data` of `/api/profile/me` and `/api/profile/update`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfilePayload {
    pub user: User,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl From<ProfilePayload> for UserWithProfile {
    fn from(p: ProfilePayload) -> Self {
        Self {
            user: p.user,
            profile: p.profile,
        }
    }
}

/// `data` of `/api/profile/setup`.
#[derive(Debug, Deserialize)]
pub(crate) struct SetupPayload {
    pub profile: UserWithProfile,
}

/// First-time profile creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSetup {
    pub date_of_birth: String,
    pub gender: Gender,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub target_weight_kg: Option<f64>,
    pub fitness_goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
}

/// Partial update; only `Some` fields go over the wire.
///
/// `target_weight_kg: Some(None)` clears the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<DietaryPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_step_goal: Option<u32>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Server-computed energy needs (BMR/TDEE) and the suggested daily targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub bmr: f64,
    pub tdee: f64,
    pub recommended_calories: f64,
    pub macros: MacroSplit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_ratios: Option<MacroRatios>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Display-ready share of calories per macro, e.g. `"30%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}
