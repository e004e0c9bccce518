//! CSV serialization of procedure records.
//!
//! Column order is fixed; downstream spreadsheets key on it. The three
//! free-text columns (study id, conditions, comments) are always quoted
//! with internal quotes doubled; everything else is a closed vocabulary or
//! a number and needs no escaping.

use std::path::{Path, PathBuf};

use tracing::info;

use ivtrack_core::models::ProcedureRecord;

use crate::error::ExportError;

const HEADERS: [&str; 15] = [
    "ID",
    "Date",
    "Provider",
    "Patient Study ID",
    "Age (Days)",
    "Sex",
    "Medical Conditions",
    "Room",
    "Weight (g)",
    "Gestational Age (wks)",
    "Access Type",
    "POCUS Used",
    "Attempts",
    "Outcome",
    "Comments",
];

/// Render the record list as CSV text, one row per record in list order.
pub fn render_csv(records: &[ProcedureRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join(","));

    for record in records {
        let row = [
            record.id.to_string(),
            record.procedure_date_time.to_string(),
            record.provider_name.to_string(),
            quote(&record.patient_study_id),
            record
                .patient_age_days
                .map(|d| d.to_string())
                .unwrap_or_default(),
            record
                .patient_sex
                .map(|s| s.to_string())
                .unwrap_or_default(),
            quote(record.medical_conditions.as_deref().unwrap_or_default()),
            record.room_number.to_string(),
            record
                .current_weight_grams
                .map(|w| w.to_string())
                .unwrap_or_default(),
            record
                .corrected_gestational_age_weeks
                .map(|w| w.to_string())
                .unwrap_or_default(),
            record.vascular_access_type.to_string(),
            if record.pocus_used { "Yes" } else { "No" }.to_string(),
            record.total_attempts.to_string(),
            record.final_outcome.to_string(),
            quote(&record.comments),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Write the CSV to `nicu_iv_tracker_export_<ISO-date>.csv` under `dir`.
///
/// The caller disables export at zero records; an empty list here is an
/// error rather than an empty file.
pub fn export_to_file(records: &[ProcedureRecord], dir: &Path) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let date = jiff::Timestamp::now().strftime("%Y-%m-%d");
    let path = dir.join(format!("nicu_iv_tracker_export_{date}.csv"));

    std::fs::write(&path, render_csv(records)).map_err(|e| ExportError::Write {
        path: path.clone(),
        source: e,
    })?;

    info!(count = records.len(), path = %path.display(), "CSV exported");

    Ok(path)
}

/// Double-quote-wrap a field, doubling any internal `"` to `""`.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
