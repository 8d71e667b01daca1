use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::NormalizePath, web, App, HttpServer};
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

use portfolio_api::{
    db::postgres::{create_pool, run_migrations},
    email::mailer::ContactMailer,
    graceful_shutdown::shutdown_signal,
    repositories::{memory::MemStorage, postgres::PgStorage, storage::Storage},
    routes::configure_routes,
    settings::AppConfig,
    use_cases::seed::seed_catalog,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let (storage, db_pool): (Arc<dyn Storage>, Option<PgPool>) = match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url)
                .await
                .expect("Failed to create database connection pool");

            run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");

            (Arc::new(PgStorage::new(pool.clone())), Some(pool))
        }
        None => {
            tracing::warn!("No database configured, falling back to in-memory storage");
            (Arc::new(MemStorage::new()), None)
        }
    };

    if let Err(e) = seed_catalog(storage.as_ref()).await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }

    let mailer = match config.smtp() {
        Some(smtp) => match ContactMailer::new(&smtp) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                tracing::error!("Mailer setup failed, contact messages will be logged only: {}", e);
                None
            }
        },
        None => {
            tracing::info!("SMTP not configured, contact messages will be logged only");
            None
        }
    };

    let app_state = web::Data::new(AppState::new(storage, mailer, db_pool));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Portfolio API v{} on {} ({} storage)",
        env!("CARGO_PKG_VERSION"),
        server_addr,
        app_state.storage_kind
    );

    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        let cors = if cors_origins.iter().any(|o| o == "*") {
            Cors::permissive()
        } else {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST"])
                .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
                .max_age(3600);
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
