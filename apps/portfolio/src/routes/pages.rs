use anyhow::anyhow;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::errors::AppError;
use crate::render::{render_page, PageOptions};
use crate::state::AppState;
use crate::ui::contact::ContactForm;
use crate::ui::{Effect, UiEvent};

/// GET /
/// Loads content (or the sample fallback) and renders the whole page.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.loader.load_or_fallback().await;
    let theme = state.theme.lock().await.current();
    let opts = PageOptions::new(theme, state.config.contact_form_action.as_deref());
    Ok(Html(render_page(&doc, &opts)?))
}

/// POST /contact
/// Target of the page's own form while no external form endpoint is set.
/// Answers with a redirect to the visitor's mail client, or on to the
/// configured endpoint (307 keeps the POST body).
pub async fn contact_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let effects = state
        .dispatcher
        .dispatch(UiEvent::ContactSubmit { form })
        .await?;

    match effects.into_iter().next() {
        Some(Effect::Navigate { href }) => redirect(StatusCode::SEE_OTHER, &href),
        Some(Effect::SubmitForm { action }) => redirect(StatusCode::TEMPORARY_REDIRECT, &action),
        other => Err(AppError::Internal(anyhow!(
            "contact submission produced {other:?}"
        ))),
    }
}

fn redirect(status: StatusCode, location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(location)
        .map_err(|e| AppError::Internal(anyhow!("invalid redirect location: {e}")))?;
    Ok((status, [(header::LOCATION, location)]).into_response())
}
