mod config;
mod http_methods;

use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok(); // loads from .env file

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // a missing csv file still serves an empty array
    let dataset = web::Data::new(atlas::load_csv_or_empty(&config.csv));
    info!(
        samples = dataset.len(),
        "rock finder server running at http://{}:{}",
        config.address,
        config.port
    );

    HttpServer::new(move || {
        http_methods::services(App::new().wrap(Logger::default()).app_data(dataset.clone()))
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
