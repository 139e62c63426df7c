use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profit_analyzer::config::{Config, LogFormat, ServerConfig};
use profit_analyzer::middleware::{json_error_handler, request_id::REQUEST_ID_HEADER, RequestId};
use profit_analyzer::modules;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Profit Analyzer");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let server_config = config.server.clone();
    let bind_address = server_config.bind_address();
    let workers = server_config.workers;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(
                web::JsonConfig::default()
                    .limit(server_config.max_payload_bytes)
                    .error_handler(json_error_handler),
            )
            .configure(modules::configure)
            .route("/", web::get().to(index))
    })
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{} ({} workers)", bind_address, workers);

    server.await.context("Server terminated with an error")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("profit_analyzer={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(config: &ServerConfig) -> Cors {
    if config.cors_allowed_origins.is_empty() {
        return Cors::permissive();
    }

    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(3600)
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Profit Analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
