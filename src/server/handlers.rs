//! POST /analyze

use super::error::ApiError;
use super::router::AppState;
use crate::core::MatchResult;
use crate::matcher::MatchEngine;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

/// Response body; `value` serializes as `null` when the word list was empty
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub value: Option<String>,
    pub lexical: String,
}

impl From<MatchResult> for AnalyzeResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            value: result.value,
            lexical: result.lexical,
        }
    }
}

/// Match the query against the current words, then remember it
///
/// The snapshot is taken before the append is scheduled, so a query never
/// matches against itself. The append runs in the background on the
/// state's task tracker and its outcome does not affect the response.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = request.text.ok_or(ApiError::MissingText)?;

    let words = state.store.snapshot();
    let result = MatchEngine::new(&words).analyze(&text);
    debug!(query = %text, words = words.len(), %result, "analyzed query");

    let store = Arc::clone(&state.store);
    state
        .appends
        .spawn(async move { store.append(text).await });

    Ok(Json(result.into()))
}
