use crate::workout::Category;

/// MET used for any category label that is not one of the known buckets.
pub const DEFAULT_MET: f64 = 5.0;

/// Body mass index from weight in kilograms and height in centimeters.
///
/// Inputs are not validated; a zero height yields a non-finite result.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / (height_cm / 100.0).powf(2.0)
}

/// Basal metabolic rate using the Mifflin-St Jeor equation.
///
/// Only a case-insensitive `"M"` takes the male branch. Every other value,
/// including empty strings and unrecognised labels, is computed with the
/// female offset.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: &str) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    if gender.eq_ignore_ascii_case("M") {
        base + 5.0
    } else {
        base - 161.0
    }
}

/// Calories burned for `duration_minutes` of activity in the category
/// labelled `category`. Labels outside the three buckets fall back to
/// [`DEFAULT_MET`].
pub fn calories(category: &str, duration_minutes: u32, weight_kg: f64) -> f64 {
    let met = category
        .parse::<Category>()
        .map(|c| c.met())
        .unwrap_or(DEFAULT_MET);
    met * 3.5 * weight_kg / 200.0 * duration_minutes as f64
}

/// Round to `places` decimal places, ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_of_reference_adult() {
        assert_eq!(round_to(bmi(70.0, 175.0), 2), 22.86);
    }

    #[test]
    fn bmi_is_monotonic() {
        let test_data = [(50.0, 150.0), (70.0, 175.0), (95.5, 190.0), (120.0, 201.3)];

        for (i, (weight, height)) in test_data.into_iter().enumerate() {
            assert!(
                bmi(weight + 1.0, height) > bmi(weight, height),
                "Test case #{}",
                i
            );
            assert!(
                bmi(weight, height + 1.0) < bmi(weight, height),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn bmr_male_and_female_branches() {
        let test_data = [
            ((70.0, 175.0, 25, "M"), 1673.75),
            ((70.0, 175.0, 25, "m"), 1673.75),
            ((60.0, 165.0, 30, "F"), 1320.25),
            ((60.0, 165.0, 30, "f"), 1320.25),
            ((60.0, 165.0, 30, "X"), 1320.25),
            ((60.0, 165.0, 30, ""), 1320.25),
            ((60.0, 165.0, 30, "Male"), 1320.25),
        ];

        for (i, ((weight, height, age, gender), expected_output)) in
            test_data.into_iter().enumerate()
        {
            assert_eq!(
                bmr(weight, height, age, gender),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn calories_per_category() {
        let test_data = [
            (("Workout", 30, 70.0), 220.5),
            (("Workout", 1, 50.0), 5.2),
            (("Workout", 3, 50.0), 15.8),
            (("Warm-up", 10, 70.0), 36.8),
            (("Cool-down", 5, 70.0), 15.3),
            (("Yoga", 30, 70.0), 183.8),
            (("", 30, 70.0), 183.8),
        ];

        for (i, ((category, duration, weight), expected_output)) in
            test_data.into_iter().enumerate()
        {
            assert_eq!(
                round_to(calories(category, duration, weight), 1),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn rounding_ties_to_even() {
        let test_data = [
            ((1673.75, 0), 1674.0),
            ((1320.25, 0), 1320.0),
            ((1320.5, 0), 1320.0),
            ((1321.5, 0), 1322.0),
            ((5.25, 1), 5.2),
            ((15.75, 1), 15.8),
            ((0.125, 2), 0.12),
            ((22.857142857142858, 2), 22.86),
        ];

        for (i, ((value, places), expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(round_to(value, places), expected_output, "Test case #{}", i);
        }
    }
}
