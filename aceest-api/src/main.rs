use std::error::Error;

use aceest_api::{config::Config, Repositories};
use aceest_store::store::Store;
use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use log::info;

fn cors(config: &Config) -> Cors {
    match &config.cors_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials(),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())?;
    info!("Loaded configuration {:?}", config);

    info!("Creating in-memory store");
    let store = Store::new();
    let repositories = Repositories::in_memory(store.clone());

    info!("Listening on {}:{}", config.host, config.port);
    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&server_config))
            .configure(|cfg| repositories.configure(cfg))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped, dropping {} users", store.lock().await.users.len());
    Ok(())
}
