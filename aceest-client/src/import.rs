use aceest_model::forms::WorkoutForm;
use itertools::Itertools;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::client::{Client, Error};

/// Workouts to be logged on behalf of one registered user.
#[derive(Debug, Deserialize)]
pub struct WorkoutImport {
    pub regn_id: String,
    pub workouts: Vec<WorkoutForm>,
}

#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub calories: f64,
}

pub struct Importer {
    client: Box<dyn Client>,
}

impl Importer {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self { client }
    }

    /// Logs in as the import's user and posts every workout. Workouts the
    /// server or local validation rejects are skipped; any other failure
    /// aborts the import.
    pub async fn run(&self, import: WorkoutImport) -> Result<ImportReport, Error> {
        info!("Logging in as {}", import.regn_id);
        self.client.login(&import.regn_id).await?;

        let mut report = ImportReport::default();
        let mut categories = Vec::new();
        for (i, form) in import.workouts.into_iter().enumerate() {
            let workout = match form.validate() {
                Ok(workout) => workout,
                Err(e) => {
                    warn!("Skipping workout #{}: {}", i, e);
                    report.skipped += 1;
                    continue;
                }
            };

            let category = workout.category;
            match self.client.add_workout(workout).await {
                Ok(response) => {
                    debug!("{}", response.message);
                    report.imported += 1;
                    report.calories += response.calories;
                    categories.push(category);
                }
                Err(Error::RequestError(message)) => {
                    warn!("Server rejected workout #{}: {}", i, message);
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        for (category, count) in categories.into_iter().counts().into_iter().sorted() {
            info!("Imported {} {} workouts", count, category);
        }

        self.client.logout().await?;
        Ok(report)
    }
}
