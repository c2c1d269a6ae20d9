//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::board::{CardView, Intent, dispatch};
use crate::config::{CardConfig, TapAction};
use crate::domain::ConfigError;
use crate::state::{ConversionError, RawEntityState};

use super::dto::*;
use super::state::AppState;
use super::templates::BoardTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/health", get(health))
        .route("/api/board", get(board_json))
        .route("/api/config", get(get_config).put(put_config))
        .route("/api/states", post(load_states))
        .route("/api/states/:entity_id", put(put_state).delete(delete_state))
        .route("/api/tap", post(tap))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The board as an HTML page.
async fn board_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let card = state.card().await;
    let tappable = card.tap_action != TapAction::None;
    let view = state.render_card(&card).await;

    let template = BoardTemplate::new(view, state.refresh_secs, tappable);
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// The board as JSON.
async fn board_json(State(state): State<AppState>) -> Json<CardView> {
    Json(state.render().await)
}

/// Current card configuration, defaults filled in.
async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let card = state.card().await;
    Json(ConfigResponse::new(CardConfig::clone(&card)))
}

/// Replace the card configuration.
///
/// The body is merged over defaults and validated before it takes effect.
async fn put_config(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConfigResponse>, AppError> {
    let card = CardConfig::from_slice(&body)?;
    card.validate()?;

    info!(
        entities = card.entities.len(),
        tap_action = ?card.tap_action,
        "card configuration replaced"
    );
    state.replace_card(card.clone()).await;

    Ok(Json(ConfigResponse::new(card)))
}

/// Push one entity's raw state.
async fn put_state(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let raw: RawEntityState = serde_json::from_slice(&body).map_err(|e| {
        warn!(entity_id, error = %e, "rejected entity state");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    state.states.ingest(&entity_id, &raw).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Push many entity states at once. Each must carry its `entity_id`.
///
/// Bad entries are skipped and counted; the rest are stored.
async fn load_states(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatesLoadedResponse>, AppError> {
    let raws: Vec<RawEntityState> =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        })?;

    let summary = state.states.ingest_all(&raws).await;
    info!(
        stored = summary.stored,
        skipped = summary.skipped,
        "entity states loaded"
    );

    Ok(Json(StatesLoadedResponse {
        stored: summary.stored,
        skipped: summary.skipped,
    }))
}

/// Make an entity absent.
async fn delete_state(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.states.remove(&entity_id).await {
        debug!(entity_id, "entity state removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("No state for {entity_id}"),
        })
    }
}

/// Resolve a tap on the card.
///
/// The intent is returned for the dashboard to carry out.
async fn tap(State(state): State<AppState>) -> Response {
    let card = state.card().await;
    match dispatch(&card) {
        Some(intent) => {
            log_intent(&intent);
            Json(intent).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

fn log_intent(intent: &Intent) {
    match intent {
        Intent::ShowDetails { entity_id } => info!(entity_id, "tap: show details"),
        Intent::InvokeService {
            domain, service, ..
        } => info!(domain, service, "tap: invoke service"),
    }
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(e: ConversionError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            warn!(%status, error = %message, "request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
