mod dto;
mod services;

pub use dto::{
    ActivityLevel, DietaryPreference, FitnessGoal, Gender, MacroRatios, MacroSplit, ProfileSetup,
    ProfileUpdate, Recommendations, UserProfile, UserWithProfile,
};
pub use services::{change_password, get_profile, get_recommendations, setup_profile, update_profile};
