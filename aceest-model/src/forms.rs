//! Request bodies as they arrive over the wire.
//!
//! Every field is optional so that an absent field can be reported by name
//! instead of failing deserialization as a whole. Numeric fields accept
//! either a JSON number or a string holding one; anything else is kept and
//! reported as an invalid field during validation.

use serde::{de::IgnoredAny, Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::profile::NewUser;
use crate::validation::ValidationError;
use crate::workout::{Category, NewWorkout};

/// A numeric form field before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(f64),
    Text(String),
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl NumberField {
    fn to_f64(&self, field: &'static str) -> Result<f64, ValidationError> {
        let value = match self {
            NumberField::Number(value) => Some(*value),
            NumberField::Text(text) => text.trim().parse::<f64>().ok(),
            NumberField::Other(_) => None,
        };
        value
            .filter(|value| value.is_finite())
            .ok_or_else(|| invalid(field, "is not a number"))
    }

    /// Integral floats such as `20.0` are accepted; `20.5` is not.
    fn to_integer(&self, field: &'static str) -> Result<i64, ValidationError> {
        let value = self.to_f64(field)?;
        if value.fract() != 0.0 {
            return Err(invalid(field, "is not a whole number"));
        }
        if value.abs() >= i64::MAX as f64 {
            return Err(invalid(field, "is too large"));
        }
        Ok(value as i64)
    }
}

impl From<f64> for NumberField {
    fn from(value: f64) -> Self {
        NumberField::Number(value)
    }
}

impl From<i64> for NumberField {
    fn from(value: i64) -> Self {
        NumberField::Number(value as f64)
    }
}

impl From<u32> for NumberField {
    fn from(value: u32) -> Self {
        NumberField::Number(value.into())
    }
}

fn invalid(field: &'static str, reason: &str) -> ValidationError {
    ValidationError::InvalidField {
        field,
        reason: reason.to_owned(),
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

fn positive(value: &NumberField, field: &'static str) -> Result<f64, ValidationError> {
    let value = value.to_f64(field)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

fn small_integer(value: i64, field: &'static str) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| invalid(field, "is too large"))
}

fn positive_integer(value: &NumberField, field: &'static str) -> Result<u32, ValidationError> {
    let value = value.to_integer(field)?;
    if value <= 0 {
        return Err(invalid(field, "must be a positive whole number"));
    }
    small_integer(value, field)
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: Option<String>,
    pub regn_id: Option<String>,
    pub age: Option<NumberField>,
    pub gender: Option<String>,
    pub height: Option<NumberField>,
    pub weight: Option<NumberField>,
}

impl RegistrationForm {
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let name = required(self.name, "name")?;
        let registration_id = required(self.regn_id, "regn_id")?;
        let age = positive_integer(&required(self.age, "age")?, "age")?;
        let gender = required(self.gender, "gender")?;
        let height_cm = positive(&required(self.height, "height")?, "height")?;
        let weight_kg = positive(&required(self.weight, "weight")?, "weight")?;

        Ok(NewUser {
            registration_id,
            name,
            age,
            gender,
            height_cm,
            weight_kg,
        })
    }
}

impl From<NewUser> for RegistrationForm {
    fn from(user: NewUser) -> Self {
        Self {
            name: Some(user.name),
            regn_id: Some(user.registration_id),
            age: Some(user.age.into()),
            gender: Some(user.gender),
            height: Some(user.height_cm.into()),
            weight: Some(user.weight_kg.into()),
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub regn_id: Option<String>,
}

impl LoginForm {
    pub fn validate(self) -> Result<String, ValidationError> {
        required(self.regn_id, "regn_id")
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutForm {
    pub category: Option<String>,
    pub exercise: Option<String>,
    pub duration: Option<NumberField>,
}

impl WorkoutForm {
    pub fn validate(self) -> Result<NewWorkout, ValidationError> {
        let category = required(self.category, "category")?;
        let exercise = required(self.exercise, "exercise")?;
        let duration = required(self.duration, "duration")?.to_integer("duration")?;

        if duration <= 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        let duration_minutes = small_integer(duration, "duration")?;
        let category = category
            .parse::<Category>()
            .map_err(|_| ValidationError::UnknownCategory(category))?;

        Ok(NewWorkout {
            category,
            exercise,
            duration_minutes,
        })
    }
}

impl From<NewWorkout> for WorkoutForm {
    fn from(workout: NewWorkout) -> Self {
        Self {
            category: Some(workout.category.to_string()),
            exercise: Some(workout.exercise),
            duration: Some(workout.duration_minutes.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn registration(age: serde_json::Value) -> RegistrationForm {
        serde_json::from_value(json!({
            "name": "Test User", "regn_id": "TEST002", "age": age,
            "gender": "F", "height": 160, "weight": 55
        }))
        .unwrap()
    }

    #[test]
    fn registration_accepts_numbers_and_numeric_strings() {
        let test_data = [
            json!({"name": "John Doe", "regn_id": "REG001", "age": 28, "gender": "M", "height": 180, "weight": 75}),
            json!({"name": "John Doe", "regn_id": "REG001", "age": "28", "gender": "M", "height": "180", "weight": "75.0"}),
            json!({"name": "John Doe", "regn_id": "REG001", "age": 28.0, "gender": "M", "height": 180.0, "weight": " 75 "}),
        ];

        for (i, body) in test_data.into_iter().enumerate() {
            let form: RegistrationForm = serde_json::from_value(body).unwrap();
            assert_eq!(
                form.validate(),
                Ok(NewUser {
                    registration_id: "REG001".to_owned(),
                    name: "John Doe".to_owned(),
                    age: 28,
                    gender: "M".to_owned(),
                    height_cm: 180.0,
                    weight_kg: 75.0,
                }),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn registration_reports_first_missing_field() {
        let form: RegistrationForm =
            serde_json::from_value(json!({"name": "Test User", "regn_id": "TEST002"})).unwrap();

        assert_eq!(form.validate(), Err(ValidationError::MissingField("age")));
    }

    #[test]
    fn registration_reports_invalid_age_by_field() {
        let test_data = [
            (json!("twenty"), "is not a number"),
            (json!(true), "is not a number"),
            (json!([25]), "is not a number"),
            (json!(25.5), "is not a whole number"),
            (json!(0), "must be a positive whole number"),
            (json!("0"), "must be a positive whole number"),
            (json!(-3), "must be a positive whole number"),
            (json!(5_000_000_000_i64), "is too large"),
        ];

        for (i, (age, reason)) in test_data.into_iter().enumerate() {
            assert_eq!(
                registration(age).validate(),
                Err(ValidationError::InvalidField {
                    field: "age",
                    reason: reason.to_owned(),
                }),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn registration_rejects_non_positive_body_measures() {
        let test_data = [
            json!({"name": "Test User", "regn_id": "TEST002", "age": 30, "gender": "F", "height": 0, "weight": 55}),
            json!({"name": "Test User", "regn_id": "TEST002", "age": 30, "gender": "F", "height": 160, "weight": "-1"}),
        ];

        for (i, body) in test_data.into_iter().enumerate() {
            let form: RegistrationForm = serde_json::from_value(body).unwrap();
            assert!(
                matches!(
                    form.validate(),
                    Err(ValidationError::InvalidField { reason, .. }) if reason == "must be a positive number"
                ),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn login_requires_registration_id() {
        let form: LoginForm = serde_json::from_value(json!({})).unwrap();

        assert_eq!(form.validate(), Err(ValidationError::MissingField("regn_id")));
    }

    #[test]
    fn workout_validation() {
        let test_data = [
            (
                json!({"category": "Workout", "exercise": "Push-ups", "duration": 30}),
                Ok(NewWorkout {
                    category: Category::Workout,
                    exercise: "Push-ups".to_owned(),
                    duration_minutes: 30,
                }),
            ),
            (
                json!({"category": "Warm-up", "exercise": "Jogging", "duration": "10"}),
                Ok(NewWorkout {
                    category: Category::WarmUp,
                    exercise: "Jogging".to_owned(),
                    duration_minutes: 10,
                }),
            ),
            (
                json!({"category": "Workout", "exercise": "Squats", "duration": 20.0}),
                Ok(NewWorkout {
                    category: Category::Workout,
                    exercise: "Squats".to_owned(),
                    duration_minutes: 20,
                }),
            ),
            (
                json!({"category": "Workout", "exercise": "Running", "duration": -10}),
                Err(ValidationError::NonPositiveDuration),
            ),
            (
                json!({"category": "Workout", "exercise": "Running", "duration": 0}),
                Err(ValidationError::NonPositiveDuration),
            ),
            (
                json!({"category": "Yoga", "exercise": "Running", "duration": 0}),
                Err(ValidationError::NonPositiveDuration),
            ),
            (
                json!({"category": "Workout", "exercise": "Running", "duration": "ten"}),
                Err(ValidationError::InvalidField {
                    field: "duration",
                    reason: "is not a number".to_owned(),
                }),
            ),
            (
                json!({"category": "Workout", "exercise": "Running", "duration": 12.5}),
                Err(ValidationError::InvalidField {
                    field: "duration",
                    reason: "is not a whole number".to_owned(),
                }),
            ),
            (
                json!({"category": "Workout", "exercise": "Running", "duration": {"minutes": 5}}),
                Err(ValidationError::InvalidField {
                    field: "duration",
                    reason: "is not a number".to_owned(),
                }),
            ),
            (
                json!({"category": "Yoga", "exercise": "Sun salutation", "duration": 15}),
                Err(ValidationError::UnknownCategory("Yoga".to_owned())),
            ),
            (
                json!({"category": "Workout", "duration": 15}),
                Err(ValidationError::MissingField("exercise")),
            ),
        ];

        for (i, (body, expected_output)) in test_data.into_iter().enumerate() {
            let form: WorkoutForm = serde_json::from_value(body).unwrap();
            assert_eq!(form.validate(), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn workout_form_serializes_without_absent_fields() {
        let form = WorkoutForm::from(NewWorkout {
            category: Category::CoolDown,
            exercise: "Stretching".to_owned(),
            duration_minutes: 5,
        });

        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"category": "Cool-down", "exercise": "Stretching", "duration": 5.0})
        );
        assert_eq!(
            serde_json::to_value(LoginForm::default()).unwrap(),
            json!({})
        );
    }
}
