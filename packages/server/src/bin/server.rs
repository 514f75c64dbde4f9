use badin_server::{router, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let port = config.port;
    info!(
        port,
        data_dir = %config.data_dir.display(),
        upload_dir = %config.upload_dir.display(),
        "starting server"
    );

    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
