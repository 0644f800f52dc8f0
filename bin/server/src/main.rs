#[tokio::main]
async fn main() {
    use hearth_access::{Role, TokenVerifier};
    use hearth_server::{auth, auth::AppState, config::ServerConfig, pages};
    use std::sync::Arc;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // A missing or unusable verification key is fatal at startup, never a
    // per-request error.
    let pem = std::fs::read(&config.auth.public_key_path)
        .expect("failed to read session verification key");
    let verifier = TokenVerifier::from_rsa_pem(&pem).expect("invalid session verification key");

    let routes = config.routes.to_table();
    let state = Arc::new(AppState::new(
        verifier,
        routes,
        Role::new(config.auth.admin_role.clone()),
        config.auth.cookie_name.clone(),
    ));

    let app = pages::router()
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::edge_guard,
        ))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
