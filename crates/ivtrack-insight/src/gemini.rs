//! Gemini `generateContent` invocation and response extraction.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use ivtrack_core::models::ProcedureRecord;

use crate::error::InsightError;
use crate::summary::{build_prompt, summarize};

const MODEL: &str = "gemini-3-flash-preview";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Below this many records the adapter answers locally instead of calling
/// the model.
pub const MIN_RECORDS_FOR_INSIGHTS: usize = 3;

pub const NEED_MORE_DATA_MESSAGE: &str =
    "Collect at least 3 procedures to generate meaningful AI insights.";

pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to generate AI insights at this time. Please ensure the API key is valid.";

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

// ── Invocation ───────────────────────────────────────────────────────────────

/// Generate insight prose for the current record list.
///
/// With fewer than [`MIN_RECORDS_FOR_INSIGHTS`] records this returns the
/// fixed need-more-data message without touching the network. The API key
/// is read from the environment at call time, never cached.
pub fn generate_insights(records: &[ProcedureRecord]) -> Result<String, InsightError> {
    if records.len() < MIN_RECORDS_FOR_INSIGHTS {
        return Ok(NEED_MORE_DATA_MESSAGE.to_string());
    }

    let api_key = std::env::var(API_KEY_ENV).map_err(|_| InsightError::MissingApiKey)?;

    let summary_json = serde_json::to_string(&summarize(records))?;
    let prompt = build_prompt(&summary_json);

    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    };

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent"
    );

    let mut response = ureq::post(&url)
        .header("x-goog-api-key", &api_key)
        .send_json(&request)
        .map_err(|e| InsightError::Invocation(e.to_string()))?;

    let body: GenerateContentResponse = response
        .body_mut()
        .read_json()
        .map_err(|e| InsightError::ResponseParse(e.to_string()))?;

    let text = body
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|t| !t.is_empty())
        .ok_or_else(|| InsightError::ResponseParse("no candidate text in response".to_string()))?;

    info!(records = records.len(), "insights generated");

    Ok(text)
}

/// [`generate_insights`] with every failure mapped to the fixed
/// user-facing fallback message. The insight panel never shows a raw error.
pub fn insights_or_fallback(records: &[ProcedureRecord]) -> String {
    match generate_insights(records) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "insight generation failed");
            UNAVAILABLE_MESSAGE.to_string()
        }
    }
}
