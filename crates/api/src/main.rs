#[tokio::main]
async fn main() {
    ledgerview_observability::init();

    let config = ledgerview_api::config::Config::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let app = ledgerview_api::app::build_app(&config)
        .await
        .expect("failed to build application");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
