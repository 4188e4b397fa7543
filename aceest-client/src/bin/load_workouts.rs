use std::{env, error::Error, fs::File, io::BufReader};

use aceest_client::import::{Importer, WorkoutImport};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let path = env::args().nth(1).unwrap_or_else(|| "workouts.json".to_owned());
    let url = env::var("ACEEST_URL").unwrap_or_else(|_| "http://localhost:5000/".to_owned());

    info!("Reading workouts from {}", path);
    let file = File::open(&path)?;
    let import: WorkoutImport = serde_json::from_reader(BufReader::new(file))?;

    let client = aceest_client::create(url)?;
    let report = Importer::new(Box::new(client)).run(import).await?;
    info!(
        "Imported {} workouts ({} kcal), skipped {}",
        report.imported, report.calories, report.skipped
    );

    Ok(())
}
