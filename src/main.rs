use std::sync::Arc;
use weather_hooks::{
    config::Config,
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            sqlx_city_repository::SqlxCityRepository,
            sqlx_temperature_repository::SqlxTemperatureRepository,
            sqlx_webhook_repository::SqlxWebhookRepository,
        },
        webhooks::{store::WebhookStore, transport::ReqwestTransport},
    },
    presentation::http::{routes::create_router, state::AppState},
    workers::{
        notifier::{Notifier, NotifierWorker},
        webhook_actor::WebhookActor,
        webhook_restorer::WebhookRestorer,
    },
};

use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,weather_hooks=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;

    let webhook_repo = Arc::new(SqlxWebhookRepository::new(db.clone()));
    let store = Arc::new(WebhookStore::new());

    let (actor, webhook_actor) = WebhookActor::new(store.clone(), config.webhook_queue_capacity);
    tokio::spawn(actor.start());

    let transport = Arc::new(ReqwestTransport::new(
        config.webhook_delivery_timeout(),
        &config.webhook_user_agent,
    )?);
    let (notifier_worker, notifier) = NotifierWorker::new(
        Notifier::new(store.clone(), transport),
        config.webhook_queue_capacity,
    );
    tokio::spawn(notifier_worker.start());

    // The actor must already be running: restore waits on its queue.
    WebhookRestorer::new(webhook_repo.clone(), webhook_actor.clone())
        .restore()
        .await;

    let state = AppState {
        db: db.clone(),
        city_repo: Arc::new(SqlxCityRepository::new(db.clone())),
        temperature_repo: Arc::new(SqlxTemperatureRepository::new(db.clone())),
        webhook_repo,
        webhook_store: store,
        webhook_actor,
        notifier,
    };

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("http server started on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
