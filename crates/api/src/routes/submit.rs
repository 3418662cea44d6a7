//! Submission Routes

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use form_validator::RawSubmission;
use risk_engine::Measurements;
use std::sync::Arc;
use storage::NewSubmission;
use tracing::{info, warn};

use crate::views;
use crate::{ApiError, AppState};

/// Show the empty submission form
pub async fn show_form() -> Html<String> {
    Html(views::render_form(None))
}

/// Handle a posted submission form.
///
/// On parse failure the form is re-rendered with the error inline and no
/// row is written. On success the measurements are assessed, the row is
/// committed, and the result view is rendered.
pub async fn handle_submit(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawSubmission>,
) -> Result<Html<String>, ApiError> {
    let submission = match raw.parse() {
        Ok(submission) => submission,
        Err(err) => {
            warn!("Rejected submission: {}", err);
            let banner = format!("Invalid input. Please check all fields. Error: {}", err);
            return Ok(Html(views::render_form(Some(&banner))));
        }
    };

    let measurements = Measurements {
        age: submission.age,
        bmi: submission.bmi,
        glucose: submission.glucose,
        bp: submission.bp,
        insulin: submission.insulin,
    };
    let assessment = state.engine.assess(&measurements);

    let record = NewSubmission {
        name: submission.name.clone(),
        age: submission.age,
        bmi: submission.bmi,
        glucose: submission.glucose,
        bp: submission.bp,
        insulin: submission.insulin,
        risk_level: assessment.level.as_str().to_string(),
        risk_message: assessment.message.to_string(),
    };
    let id = state.repository.append(&record).await?;
    info!(
        "Recorded submission {} for {:?} as {}",
        id, submission.name, assessment.level
    );

    Ok(Html(views::render_result(&submission.name, &assessment)))
}
