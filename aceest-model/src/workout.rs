use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::calculator;

/// Workout buckets every user owns. Declaration order is the order buckets
/// are reported in.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    #[strum(serialize = "Warm-up")]
    #[cfg_attr(feature = "serde", serde(rename = "Warm-up"))]
    WarmUp,
    #[strum(serialize = "Workout")]
    #[cfg_attr(feature = "serde", serde(rename = "Workout"))]
    Workout,
    #[strum(serialize = "Cool-down")]
    #[cfg_attr(feature = "serde", serde(rename = "Cool-down"))]
    CoolDown,
}

impl Category {
    pub fn met(&self) -> f64 {
        match self {
            Category::WarmUp => 3.0,
            Category::Workout => 6.0,
            Category::CoolDown => 2.5,
        }
    }
}

/// Validated workout request, ready to be priced and stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewWorkout {
    pub category: Category,
    pub exercise: String,
    pub duration_minutes: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkoutEntry {
    pub exercise: String,
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub duration_minutes: u32,
    pub calories: f64,
    #[cfg_attr(feature = "serde", serde(rename = "timestamp"))]
    pub created_at: NaiveDateTime,
    pub date: NaiveDate,
}

impl WorkoutEntry {
    /// Prices `workout` for a person weighing `weight_kg` and stamps it with
    /// `created_at`.
    pub fn new(workout: NewWorkout, weight_kg: f64, created_at: NaiveDateTime) -> Self {
        let calories = calculator::calories(
            &workout.category.to_string(),
            workout.duration_minutes,
            weight_kg,
        );
        Self {
            exercise: workout.exercise,
            duration_minutes: workout.duration_minutes,
            calories: calculator::round_to(calories, 1),
            created_at,
            date: created_at.date(),
        }
    }
}

/// All workout buckets of a single user.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutLog {
    buckets: BTreeMap<Category, Vec<WorkoutEntry>>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self {
            buckets: Category::iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, category: Category, entry: WorkoutEntry) {
        self.buckets.entry(category).or_default().push(entry)
    }

    pub fn entries(&self, category: Category) -> &[WorkoutEntry] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Buckets in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[WorkoutEntry])> {
        Category::iter().map(|c| (c, self.entries(c)))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn category_labels() {
        let test_data = [
            ("Warm-up", Some(Category::WarmUp)),
            ("Workout", Some(Category::Workout)),
            ("Cool-down", Some(Category::CoolDown)),
            ("warm-up", None),
            ("Stretching", None),
        ];

        for (i, (label, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(label.parse::<Category>().ok(), expected_output, "Test case #{}", i);
            if let Some(category) = expected_output {
                assert_eq!(category.to_string(), label, "Test case #{}", i);
            }
        }
    }

    #[test]
    fn entry_is_priced_and_dated() {
        let entry = WorkoutEntry::new(
            NewWorkout {
                category: Category::Workout,
                exercise: "Push-ups".to_owned(),
                duration_minutes: 30,
            },
            70.0,
            at(18),
        );

        assert_eq!(entry.calories, 220.5);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(entry.duration_minutes, 30);
    }

    #[test]
    fn fresh_log_has_all_buckets_in_order() {
        let log = WorkoutLog::new();

        let categories: Vec<_> = log.iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![Category::WarmUp, Category::Workout, Category::CoolDown]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn push_appends_to_matching_bucket() {
        let mut log = WorkoutLog::new();
        let entry = WorkoutEntry::new(
            NewWorkout {
                category: Category::CoolDown,
                exercise: "Stretching".to_owned(),
                duration_minutes: 5,
            },
            70.0,
            at(19),
        );

        log.push(Category::CoolDown, entry.clone());

        assert_eq!(log.entries(Category::CoolDown), &[entry]);
        assert!(log.entries(Category::Workout).is_empty());
        assert_eq!(log.len(), 1);
    }
}
