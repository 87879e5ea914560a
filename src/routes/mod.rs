pub mod champions;
pub mod race_winners;
pub mod season_winners;

use axum::{routing::get, Router};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::{error::Error, str::FromStr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    handlers::health::health_check,
    routes::{
        champions::champion_routes, race_winners::race_winner_routes,
        season_winners::season_winner_routes,
    },
    services::ergast::ErgastClient,
    utils::{config::Config, state::AppState},
};

pub async fn make_app() -> Result<(Router, u16), Box<dyn Error>> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();

    info!("Configuration loaded successfully");
    let connect_options = PgConnectOptions::from_str(&config.db_url)?;
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .idle_timeout(Some(std::time::Duration::from_secs(60)))
        .connect_with(connect_options)
        .await?;

    info!("Database connection pool created successfully");
    let http_client = reqwest::Client::new();
    let ergast = ErgastClient::new(http_client, config.ergast_base_url.clone());
    info!("External clients initialized successfully");

    let port = config.port;
    let state = Arc::new(AppState {
        db_pool,
        config,
        ergast,
    });

    let f1_routes = champion_routes()
        .merge(race_winner_routes())
        .merge(season_winner_routes());

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/f1", f1_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    Ok((app, port))
}
