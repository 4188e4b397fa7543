use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator;

/// Weight assumed when pricing a workout for someone without a profile.
pub const FALLBACK_WEIGHT_KG: f64 = 70.0;

/// Validated registration data.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub registration_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "regn_id"))]
    pub registration_id: String,
    pub age: u32,
    pub gender: String,
    #[cfg_attr(feature = "serde", serde(rename = "height"))]
    pub height_cm: f64,
    #[cfg_attr(feature = "serde", serde(rename = "weight"))]
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmr: f64,
    #[cfg_attr(feature = "serde", serde(rename = "registered_date"))]
    pub registered_at: NaiveDateTime,
}

impl UserProfile {
    /// Derives BMI and BMR for `user`. Gender is stored upper-cased.
    pub fn new(user: NewUser, registered_at: NaiveDateTime) -> Self {
        let gender = user.gender.to_uppercase();
        let bmi = calculator::bmi(user.weight_kg, user.height_cm);
        let bmr = calculator::bmr(user.weight_kg, user.height_cm, user.age, &gender);

        Self {
            name: user.name,
            registration_id: user.registration_id,
            age: user.age,
            gender,
            height_cm: user.height_cm,
            weight_kg: user.weight_kg,
            bmi: calculator::round_to(bmi, 2),
            bmr: calculator::round_to(bmr, 0),
            registered_at,
        }
    }
}
