//! History-view search: case-insensitive substring match over the fields a
//! clinician actually scans for: study id, provider, and access type.

use crate::models::ProcedureRecord;

/// Records whose study id, provider name, or access type contains `term`,
/// case-insensitively, preserving list order. An empty term matches all.
pub fn search<'a>(records: &'a [ProcedureRecord], term: &str) -> Vec<&'a ProcedureRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.patient_study_id.to_lowercase().contains(&needle)
                || r.provider_name.as_str().to_lowercase().contains(&needle)
                || r.vascular_access_type.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}
