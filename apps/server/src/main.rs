use tickerdeck_server::{api::app_router, build_state, config::Config, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Startup aborted: {:#}", e);
            return Err(e);
        }
    };
    let state = build_state(&config);
    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
