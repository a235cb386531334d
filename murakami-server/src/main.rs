mod routes;
mod state;

use anyhow::Result;
use murakami_core::config::MurakamiConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "murakami=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MurakamiConfig::load()?;
    let addr = config.server.address();

    let state = AppState::new(config)?;
    tracing::info!(feed = %state.synthesizer().source().describe(), "Calendar feed configured");

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("murakami-server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
