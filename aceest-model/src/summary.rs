use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator::round_to;
use crate::workout::{Category, WorkoutEntry, WorkoutLog};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategorySummary {
    pub count: usize,
    pub total_time: u64,
    pub total_calories: f64,
    pub sessions: Vec<WorkoutEntry>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    pub categories: BTreeMap<Category, CategorySummary>,
    pub total_time: u64,
    pub total_calories: f64,
    pub session_count: usize,
}

/// Chart data: parallel arrays holding only categories that have logged
/// time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Progress {
    pub categories: Vec<Category>,
    pub durations: Vec<u64>,
    pub calories: Vec<f64>,
}

fn totals(entries: &[WorkoutEntry]) -> (u64, f64) {
    entries.iter().fold((0, 0.0), |(time, calories), entry| {
        (
            time + entry.duration_minutes as u64,
            calories + entry.calories,
        )
    })
}

impl Summary {
    pub fn from_log(log: &WorkoutLog) -> Self {
        let mut categories = BTreeMap::new();
        let mut total_time = 0;
        let mut total_calories = 0.0;
        let mut session_count = 0;

        for (category, entries) in log.iter() {
            let (time, calories) = totals(entries);
            total_time += time;
            total_calories += calories;
            session_count += entries.len();
            categories.insert(
                category,
                CategorySummary {
                    count: entries.len(),
                    total_time: time,
                    total_calories: round_to(calories, 1),
                    sessions: entries.to_vec(),
                },
            );
        }

        Self {
            categories,
            total_time,
            total_calories: round_to(total_calories, 1),
            session_count,
        }
    }
}

impl Progress {
    pub fn from_log(log: &WorkoutLog) -> Self {
        log.iter()
            .map(|(category, entries)| (category, totals(entries)))
            .filter(|(_, (time, _))| *time > 0)
            .fold(Progress::default(), |mut progress, (category, (time, calories))| {
                progress.categories.push(category);
                progress.durations.push(time);
                progress.calories.push(round_to(calories, 1));
                progress
            })
    }
}
