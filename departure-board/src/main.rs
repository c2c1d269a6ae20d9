use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use departure_board::clock::SystemClock;
use departure_board::settings::Settings;
use departure_board::state::StateStore;
use departure_board::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let card = settings.load_card_config()?;
    info!(
        entities = card.entities.len(),
        source = ?settings.card_config,
        "card configuration loaded"
    );
    if card.entities.is_empty() {
        warn!("card lists no entities; the board will be empty");
    }

    let states = StateStore::new();
    let initial = settings.load_initial_states()?;
    if !initial.is_empty() {
        let summary = states.ingest_all(&initial).await;
        info!(
            stored = summary.stored,
            skipped = summary.skipped,
            "initial entity states loaded"
        );
    }

    let state = AppState::new(
        states,
        card,
        Arc::new(SystemClock),
        settings.language.clone(),
        settings.refresh_secs,
    );

    let static_dir = settings.static_dir.to_string_lossy();
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(settings.bind).await?;
    info!(addr = %settings.bind, "departure board listening");
    info!("GET  /                    - board page");
    info!("GET  /api/board           - board as JSON");
    info!("PUT  /api/config          - replace card configuration");
    info!("PUT  /api/states/{{id}}     - push an entity state");
    info!("POST /api/tap             - resolve a tap");

    axum::serve(listener, app).await?;
    Ok(())
}
