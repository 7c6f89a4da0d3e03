use safe_steps::api::service::{router, State};
use safe_steps::config::{self, Config, VARIABLES};
use safe_steps::db;

#[tokio::main]
async fn main() {
    let dotenv = config::load_dotenv();
    env_logger::init();

    match dotenv {
        Ok(Some(path)) => log::info!("config: loaded {}", path.display()),
        Ok(None) => {}
        Err(e) => log::warn!("config: {e}"),
    }

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check the environment variables ({}).",
            VARIABLES.join(", ")
        );
    })?;

    config.log();

    let connection = db::Connection::default();
    connection.open(config.database_url.clone());

    let state = State::new(connection);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = router::router(state);

    log::info!("Server is running on port {}", config.listen_port);
    axum::serve(listener, router).await?;

    Ok(())
}
