use std::sync::Arc;

use api_service::config::Config;
use api_service::domain::auth::service::AuthService;
use api_service::inbound::http::router::create_router;
use api_service::outbound::store::InMemoryCredentialStore;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

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

    let config = Config::load()?;

    // A misconfigured signing key is fatal here, never per-request
    if config.auth.jwt_secret.len() < 32 {
        anyhow::bail!("auth.jwt_secret must be at least 32 bytes for HS256");
    }

    tracing::info!(
        http_port = config.server.http_port,
        access_token_expire_minutes = config.auth.access_token_expire_minutes,
        "Configuration loaded"
    );

    let hasher = PasswordHasher::new();
    let store = Arc::new(InMemoryCredentialStore::seeded(&hasher)?);
    tracing::info!(store = "in-memory", "Credential store seeded");

    let token_codec = TokenCodec::new(
        config.auth.jwt_secret.as_bytes(),
        Duration::minutes(config.auth.default_token_expire_minutes),
    );
    let auth_service = Arc::new(AuthService::new(
        store,
        token_codec,
        Duration::minutes(config.auth.access_token_expire_minutes),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
