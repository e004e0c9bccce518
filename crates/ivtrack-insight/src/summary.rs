//! Compact per-record summary sent to the model.
//!
//! Only the fields the analysis needs: provider, type, guidance, attempts,
//! outcome, weight. Study ids, dates, and free text stay local.

use serde::Serialize;

use ivtrack_core::models::{AccessType, Outcome, ProcedureRecord, Provider};

#[derive(Debug, Clone, Serialize)]
pub struct ProcedureSummary {
    pub provider: Provider,
    #[serde(rename = "type")]
    pub access_type: AccessType,
    pub pocus: bool,
    pub attempts: u32,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

pub fn summarize(records: &[ProcedureRecord]) -> Vec<ProcedureSummary> {
    records
        .iter()
        .map(|r| ProcedureSummary {
            provider: r.provider_name,
            access_type: r.vascular_access_type,
            pocus: r.pocus_used,
            attempts: r.total_attempts,
            outcome: r.final_outcome,
            weight: r.current_weight_grams,
        })
        .collect()
}

/// The fixed analysis prompt with the summary JSON embedded.
pub fn build_prompt(summary_json: &str) -> String {
    format!(
        "As a clinical research assistant specializing in NICU vascular access, \
         analyze the following procedure data and provide 3-5 actionable insights \
         or observations to improve success rates and reduce skin punctures.\n\n\
         Data Summary:\n{summary_json}\n\n\
         Please focus on:\n\
         1. The correlation between POCUS usage and success rates.\n\
         2. High attempt counts and potential training needs.\n\
         3. Performance across different procedure types.\n\n\
         Format the response as clear, professional bullet points."
    )
}
