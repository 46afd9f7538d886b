//! Karmic Matrix server binary.
//!
//! Wires the Postgres adapters, session service and HTTP routers together
//! from environment configuration and serves the API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use karmic_matrix::adapters::auth::JwtSessionService;
use karmic_matrix::adapters::http::{
    build_router, AdminHandlers, AuthHandlers, AuthState, MapHandlers, WebhookHandlers,
};
use karmic_matrix::adapters::postgres::{
    PostgresEmailRepository, PostgresInterpretationRepository, PostgresMapRepository,
};
use karmic_matrix::application::handlers::admin::{
    EditInterpretationsHandler, ManageEmailsHandler,
};
use karmic_matrix::application::handlers::auth::LoginHandler;
use karmic_matrix::application::handlers::map::{
    GenerateMapHandler, GetMapHandler, ListMapsHandler,
};
use karmic_matrix::application::handlers::webhook::ProcessOrderEventHandler;
use karmic_matrix::config::AppConfig;
use karmic_matrix::domain::access::AllowedEmail;
use karmic_matrix::domain::orders::{OrderAccessPolicy, YampiWebhookVerifier};
use karmic_matrix::ports::{
    AllowedEmailRepository, InterpretationRepository, MapRepository, SessionIssuer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting karmic-matrix"
    );

    // Database pool and migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    // Repositories
    let emails: Arc<dyn AllowedEmailRepository> =
        Arc::new(PostgresEmailRepository::new(pool.clone()));
    let maps: Arc<dyn MapRepository> = Arc::new(PostgresMapRepository::new(pool.clone()));
    let interpretations: Arc<dyn InterpretationRepository> =
        Arc::new(PostgresInterpretationRepository::new(pool.clone()));

    // Configured admins are seeded into the allow-list so the panel is
    // reachable on a fresh database.
    for admin in config.auth.admin_email_list() {
        emails.upsert(&AllowedEmail::manual(admin, true)).await?;
    }

    // Session service (issuer + validator)
    let sessions = Arc::new(JwtSessionService::new(
        config.auth.jwt_secret.clone(),
        config.auth.session_ttl_secs,
        emails.clone(),
    ));
    let issuer: Arc<dyn SessionIssuer> = sessions.clone();
    let validator: AuthState = sessions;

    // Use case handlers
    let auth_handlers = AuthHandlers::new(Arc::new(LoginHandler::new(emails.clone(), issuer)));
    let map_handlers = MapHandlers::new(
        Arc::new(GenerateMapHandler::new(maps.clone(), interpretations.clone())),
        Arc::new(GetMapHandler::new(maps.clone(), interpretations.clone())),
        Arc::new(ListMapsHandler::new(maps)),
    );
    let admin_handlers = AdminHandlers::new(
        Arc::new(ManageEmailsHandler::new(emails.clone())),
        Arc::new(EditInterpretationsHandler::new(interpretations)),
    );
    let webhook_handlers = WebhookHandlers::new(Arc::new(ProcessOrderEventHandler::new(
        YampiWebhookVerifier::new(config.yampi.webhook_secret.clone()),
        OrderAccessPolicy::new(config.yampi.product_sku_list()),
        emails,
    )));

    let app = build_router(
        auth_handlers,
        map_handlers,
        admin_handlers,
        webhook_handlers,
        validator,
        &config.server,
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
