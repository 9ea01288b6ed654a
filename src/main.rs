use anyhow::Result;
use dotenv::dotenv;
use log::{error, info};

use event_digest::api::handlers::generate_stage_routes;
use event_digest::bootstrap::setup::initialize_logger;
use event_digest::config::AppConfig;
use event_digest::enrich::Enricher;

fn build_rocket(config: &AppConfig, enricher: Enricher) -> rocket::Rocket<rocket::Build> {
    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .manage(enricher)
        .mount("/", generate_stage_routes())
}

#[rocket::main]
async fn main() -> Result<()> {
    dotenv().ok();
    initialize_logger();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(
                "FATAL ERROR: GCLOUD_PROJECT and GCS_BUCKET_NAME environment variables are required."
            );
            error!("{}", err);
            std::process::exit(1);
        }
    };

    let enricher = Enricher::from_config(&config);

    info!("Backend server listening at http://localhost:{}", config.port);
    build_rocket(&config, enricher).launch().await?;

    Ok(())
}
