//! History Routes

use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::views;
use crate::{ApiError, AppState};

/// Render the full submission history, newest first
pub async fn show_history(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let records = state.repository.list_all().await?;
    Ok(Html(views::render_history(&records)))
}
