use actix_web::{App, HttpServer};
use storefront_api::app::{cors, AppState};
use storefront_api::config::Config;
use storefront_api::core::Storage;
use storefront_api::middleware::RequestId;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    // RUST_LOG wins over LOG_LEVEL when both are set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("storefront_api={0},actix_web=info", config.app.log_level).into()
    });
    let production = config.app.is_production();
    let json_layer = production.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!production).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::info!("Starting storefront API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let storage = Storage::connect(&config.database)
        .await
        .expect("Failed to initialize storage");

    tracing::info!(
        backend = storage.backend_name(),
        pool_size = config.database.pool_size,
        "Storage initialized"
    );

    let state = AppState::from_config(&config, storage);
    if !state.api_gate().is_enabled() {
        tracing::warn!("API_KEY_HASH/API_KEY not set; /api is open to unauthenticated callers");
    }
    let allowed_origins = config.security.cors_allowed_origins.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
