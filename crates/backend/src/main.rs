#![allow(
    clippy::useless_format,
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::redundant_pattern_matching
)]

pub mod api;
pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

use axum::http::{header, Method};
use axum::middleware;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

const LISTEN_PORT: u16 = 3000;

/// Stdout layer plus a plain-text file log under target/logs
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let env_filter = tracing_subscriber::EnvFilter::new(
        // Keep application logs, silence SQL chatter
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
    );

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

fn build_router() -> Router {
    let require_auth = || middleware::from_fn(system::auth::middleware::require_auth);
    let require_admin = || middleware::from_fn(system::auth::middleware::require_admin);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(require_auth()),
        )
        // System users management (admin only)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(require_admin()),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(require_admin()),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password).layer(require_auth()),
        )
        // ========================================
        // PROFILE ONBOARDING (protected)
        // ========================================
        .route(
            "/api/profile",
            get(api::handlers::profile::get_profile)
                .post(api::handlers::profile::save_profile)
                .layer(require_auth()),
        )
        .route(
            "/api/profile/completion",
            get(api::handlers::profile::completion).layer(require_auth()),
        )
        .route(
            "/api/profile/verify-document",
            post(api::handlers::profile::verify_document).layer(require_auth()),
        )
        // ========================================
        // DASHBOARD & STATS (protected)
        // ========================================
        .route(
            "/api/dashboard",
            get(api::handlers::dashboard::get_dashboard_data).layer(require_auth()),
        )
        .route(
            "/api/service-requests/stats",
            get(api::handlers::stats::service_request_stats).layer(require_auth()),
        )
        .route(
            "/api/work-orders/stats",
            get(api::handlers::stats::work_order_stats).layer(require_auth()),
        )
        // ========================================
        // EOI INVITATIONS (protected)
        // ========================================
        .route(
            "/api/eoi",
            get(api::handlers::eoi::list_all)
                .post(api::handlers::eoi::upsert)
                .layer(require_auth()),
        )
        .route(
            "/api/eoi/:id",
            get(api::handlers::eoi::get_by_id)
                .delete(api::handlers::eoi::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/eoi/:id/coc-export",
            get(api::handlers::eoi::export_coc).layer(require_auth()),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors_layer())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    // Database path comes from config.toml next to the executable
    let config = shared::config::load_config()?;
    let db_path = config.database_path();
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    system::initialization::ensure_admin_user_exists().await?;
    system::initialization::ensure_demo_accounts_exist().await?;

    let addr: SocketAddr = ([0, 0, 0, 0], LISTEN_PORT).into();
    tracing::info!("Binding server to http://{}", addr);
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            tracing::error!("Port {} is already in use", LISTEN_PORT);
        }
        anyhow::anyhow!("failed to bind port {}: {}", LISTEN_PORT, e)
    })?;

    axum::serve(listener, build_router()).await?;

    Ok(())
}
