//! Axum route handlers for the Biosketch API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::biosketch::generator::{
    generate_biosketch, GenerateBiosketchRequest, GenerateBiosketchResponse,
};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate-biosketch
///
/// Validates the three documents, then relays one prompt to the LLM and returns its text.
/// A body that is missing, empty, not JSON or not sent as JSON carries no fields, so it
/// gets the same 400 as a missing field. Missing fields never reach the LLM.
pub async fn handle_generate_biosketch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateBiosketchResponse>, AppError> {
    let request = match payload {
        Ok(Json(body)) => GenerateBiosketchRequest::from_json(body),
        Err(rejection) => {
            debug!("Request body treated as empty: {}", rejection.body_text());
            GenerateBiosketchRequest::default()
        }
    };
    let input = request.validate()?;

    let request_id = Uuid::new_v4();
    let biosketch = generate_biosketch(state.llm.as_ref(), &input)
        .instrument(info_span!("generate_biosketch", %request_id))
        .await?;

    Ok(Json(GenerateBiosketchResponse { biosketch }))
}
