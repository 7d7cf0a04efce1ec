//! Biosketch generation: validate the three documents, fill the prompt, make one LLM call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::biosketch::prompts::render_prompt;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /generate-biosketch`.
///
/// Fields are kept as raw JSON so that an absent key, `null`, `""`, `false` and `0` all
/// reach `validate` and get the same 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBiosketchRequest {
    pub resume: Option<Value>,
    pub personal_statement: Option<Value>,
    pub scientific_contributions: Option<Value>,
}

/// The three documents after presence checks. Values are untouched: no trimming,
/// no escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiosketchInput<'a> {
    pub resume: &'a str,
    pub personal_statement: &'a str,
    pub scientific_contributions: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBiosketchResponse {
    pub biosketch: String,
}

impl GenerateBiosketchRequest {
    /// Reads the request out of a parsed body. Anything other than a JSON object
    /// (arrays, scalars) carries no fields.
    pub fn from_json(body: Value) -> Self {
        if !body.is_object() {
            return Self::default();
        }
        serde_json::from_value(body).unwrap_or_default()
    }

    /// Checks that every field is a non-empty string. Whitespace-only values pass.
    pub fn validate(&self) -> Result<BiosketchInput<'_>, AppError> {
        fn present(field: &Option<Value>) -> Option<&str> {
            match field {
                Some(Value::String(v)) if !v.is_empty() => Some(v.as_str()),
                _ => None,
            }
        }

        match (
            present(&self.resume),
            present(&self.personal_statement),
            present(&self.scientific_contributions),
        ) {
            (Some(resume), Some(personal_statement), Some(scientific_contributions)) => {
                Ok(BiosketchInput {
                    resume,
                    personal_statement,
                    scientific_contributions,
                })
            }
            _ => Err(AppError::MissingFields),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Fills the biosketch template with the three documents, verbatim.
pub fn build_prompt(input: &BiosketchInput<'_>) -> Result<String, minijinja::Error> {
    render_prompt(input)
}

/// Makes exactly one generation call. Any failure is logged here and surfaced as an
/// `AppError` that renders as the generic 500.
pub async fn generate_biosketch(
    llm: &dyn TextGenerator,
    input: &BiosketchInput<'_>,
) -> Result<String, AppError> {
    let prompt = build_prompt(input).map_err(|e| {
        error!("Failed to render biosketch prompt: {e}");
        AppError::Prompt(e)
    })?;

    match llm.generate(&prompt).await {
        Ok(biosketch) => {
            info!("Generated biosketch ({} chars)", biosketch.len());
            Ok(biosketch)
        }
        Err(e) => {
            error!("Error generating biosketch: {e}");
            Err(AppError::Generation(e))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
