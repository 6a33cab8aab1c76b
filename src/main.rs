mod config;
mod error;
mod upstream;
mod web;

use actix_web::{web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info, warn};

use config::Config;
use upstream::OpenRouterClient;
use web::routes;

// App state structure
pub struct AppState {
    config: Config,
    upstream: OpenRouterClient,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OpenRouter chat proxy");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    if config.openrouter_api_key.is_none() {
        warn!("OPENROUTER_API_KEY is not set; callers must supply their own key");
    }

    let upstream = OpenRouterClient::new(&config).context("failed to build HTTP client")?;
    let bind = (config.host.clone(), config.port);
    let app_state = Data::new(AppState { config, upstream });

    info!("Listening on {}:{}", bind.0, bind.1);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
