use std::sync::Arc;

use anyhow::Context;
use api_service::config::Config;
use api_service::domain::user::ports::AuthServicePort;
use api_service::domain::user::service::AuthenticationService;
use api_service::inbound::http::router::create_router;
use api_service::outbound::repositories::InMemoryUserRepository;
use api_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "api-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        credential_store = if config.database.is_some() { "postgresql" } else { "memory" },
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let auth_service: Arc<dyn AuthServicePort> = match &config.database {
        Some(database) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(MAX_DB_CONNECTIONS)
                .connect(&database.url)
                .await
                .context("Failed to connect to the credential database")?;
            tracing::info!(
                max_connections = MAX_DB_CONNECTIONS,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let repository = Arc::new(PostgresUserRepository::new(pg_pool));
            Arc::new(AuthenticationService::new(repository, authenticator))
        }
        None => {
            let repository = InMemoryUserRepository::from_seed(&config.users)
                .context("Invalid [[users]] entry in configuration")?;
            if repository.is_empty() {
                tracing::warn!("No users configured; every login will be rejected");
            } else {
                tracing::info!(users = repository.len(), "In-memory credential store loaded");
            }

            Arc::new(AuthenticationService::new(Arc::new(repository), authenticator))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, config.token_ttl());
    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
