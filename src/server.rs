use anyhow::Result;
use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};
use sea_orm::ConnectOptions;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_ADDR, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILTER};
use crate::{db, handlers, store::Store};

/// Process configuration, read from the environment.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) database_url: String,
    pub(crate) addr: String,
}

impl Config {
    /// `DATABASE_URL` falls back to a local SQLite file, `ADDR` to `DEFAULT_ADDR`.
    pub(crate) fn from_env() -> Self {
        Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            addr: std::env::var("ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned()),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) store: Store,
}

impl State {
    pub(crate) fn new(store: Store) -> Self {
        State { store }
    }

    /// Attempt to create a new State instance, creating any missing tables along the way
    pub(crate) async fn try_new(config: &Config) -> Result<State> {
        let db = db::connect(ConnectOptions::new(config.database_url.clone())).await?;
        db::setup_schema(&db).await?;
        Ok(State::new(Store::new(db)))
    }
}

/// Every route, with tracing and a CORS policy that admits any origin.
pub(crate) fn router(state: State) -> Router {
    Router::new()
        .route("/users", get(handlers::get_users))
        .route("/user", post(handlers::create_user))
        // `GET` takes an email, `DELETE` an id
        .route(
            "/user/:key",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .route("/vehicles", get(handlers::get_all_vehicles))
        .route("/vehicles/:user_id", get(handlers::get_vehicles))
        .route("/vehicle", post(handlers::create_vehicle))
        .route("/vehicle/:id", delete(handlers::delete_vehicle))
        .route("/repairs/:vehicle_id", get(handlers::get_repairs))
        .route("/repair", post(handlers::create_repair))
        .route("/repair/:id", delete(handlers::delete_repair))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(Extension(Arc::new(state))),
        )
}

/// Run the server.
pub(crate) async fn run() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let state = State::try_new(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
