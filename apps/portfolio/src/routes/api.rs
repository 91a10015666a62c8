use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::content::ContentDocument;
use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::contact::ContactForm;
use crate::ui::session::run_session;
use crate::ui::{Effect, Theme, UiEvent};

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub icon: &'static str,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            icon: theme.icon(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EventBatch {
    pub events: Vec<UiEvent>,
}

#[derive(Debug, Serialize)]
pub struct EffectsResponse {
    pub effects: Vec<Effect>,
}

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Json<ContentDocument> {
    Json(state.loader.load_or_fallback().await)
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(state.theme.lock().await.current().into())
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = state.theme.lock().await.toggle().await?;
    Ok(Json(theme.into()))
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<EffectsResponse>, AppError> {
    let effects = state
        .dispatcher
        .dispatch(UiEvent::ContactSubmit { form })
        .await?;
    Ok(Json(EffectsResponse { effects }))
}

/// GET /api/v1/resume
pub async fn handle_resume(State(state): State<AppState>) -> Result<Json<EffectsResponse>, AppError> {
    let effects = state.dispatcher.dispatch(UiEvent::ResumeDownload).await?;
    Ok(Json(EffectsResponse { effects }))
}

/// POST /api/v1/events
pub async fn handle_events(
    State(state): State<AppState>,
    Json(batch): Json<EventBatch>,
) -> Result<Json<EffectsResponse>, AppError> {
    let effects = run_session(&state.dispatcher, batch.events).await?;
    Ok(Json(EffectsResponse { effects }))
}
