//! Aggregation engine: dashboard and analytics figures derived from a
//! snapshot of the record list.
//!
//! Every function here is pure and synchronous, and accepts any input
//! including the empty list. Divisions are guarded and substitute zero, so
//! there is no error channel and no NaN can escape. Rates are always
//! recomputed from raw counts; previously rounded percentages are never
//! averaged, which would compound rounding error.
//!
//! Rounding rules: percentages round half away from zero to the nearest
//! integer (`f64::round`); mean attempts round to one fractional digit.
//! The dashboard and analytics views share these helpers so their figures
//! always agree.

use serde::{Deserialize, Serialize};

use crate::models::{Outcome, ProcedureRecord, Provider};

/// How many records the recent-procedures trend covers.
pub const TREND_WINDOW: usize = 10;

/// How many providers the top-performers card shows.
pub const TOP_PERFORMER_COUNT: usize = 3;

// ── Output shapes ────────────────────────────────────────────────────────────

/// The four dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_procedures: usize,
    /// Overall success rate, 0–100.
    pub success_rate: u32,
    /// Mean skin punctures per procedure, one fractional digit.
    pub avg_attempts: f64,
    /// Share of procedures done under ultrasound guidance, 0–100.
    pub pocus_usage: u32,
}

/// Per-provider success figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    pub provider: Provider,
    /// Success rate within this provider's procedures, 0–100.
    pub rate: u32,
    /// Number of procedures this provider logged.
    pub count: usize,
}

/// POCUS-guided vs. landmark-technique comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceComparison {
    pub pocus_success_rate: u32,
    pub pocus_avg_attempts: f64,
    pub landmark_success_rate: u32,
    pub landmark_avg_attempts: f64,
}

/// Raw success/failure counts, no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub success: usize,
    pub failure: usize,
}

/// One point on the recent-attempts trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// The record's display label (its patient study id).
    pub label: String,
    pub attempts: u32,
}

// ── Scalar rates ─────────────────────────────────────────────────────────────

/// Overall success rate as a whole percentage, 0 when the list is empty.
pub fn overall_success_rate(records: &[ProcedureRecord]) -> u32 {
    let successes = records.iter().filter(|r| r.succeeded()).count();
    percent(successes, records.len())
}

/// Mean attempts per procedure to one fractional digit, 0 when empty.
pub fn average_attempts(records: &[ProcedureRecord]) -> f64 {
    mean_attempts(records)
}

/// Share of procedures performed under POCUS guidance, 0 when empty.
pub fn pocus_usage_rate(records: &[ProcedureRecord]) -> u32 {
    let guided = records.iter().filter(|r| r.pocus_used).count();
    percent(guided, records.len())
}

/// The four dashboard stat cards in one call.
pub fn dashboard_stats(records: &[ProcedureRecord]) -> DashboardStats {
    DashboardStats {
        total_procedures: records.len(),
        success_rate: overall_success_rate(records),
        avg_attempts: average_attempts(records),
        pocus_usage: pocus_usage_rate(records),
    }
}

// ── Groupings ────────────────────────────────────────────────────────────────

/// Success rate and case count per provider, in first-seen order.
///
/// Each provider appears exactly once; the per-group rate is computed from
/// that group's raw counts.
pub fn success_rate_by_provider(records: &[ProcedureRecord]) -> Vec<ProviderStats> {
    let mut groups: Vec<(Provider, usize, usize)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(p, _, _)| *p == record.provider_name) {
            Some((_, total, successes)) => {
                *total += 1;
                if record.succeeded() {
                    *successes += 1;
                }
            }
            None => {
                let successes = usize::from(record.succeeded());
                groups.push((record.provider_name, 1, successes));
            }
        }
    }

    groups
        .into_iter()
        .map(|(provider, total, successes)| ProviderStats {
            provider,
            rate: percent(successes, total),
            count: total,
        })
        .collect()
}

/// The per-provider figures sorted by rate descending, ties broken by case
/// count descending, truncated to the top three.
pub fn top_performers(records: &[ProcedureRecord]) -> Vec<ProviderStats> {
    let mut stats = success_rate_by_provider(records);
    stats.sort_by(|a, b| b.rate.cmp(&a.rate).then(b.count.cmp(&a.count)));
    stats.truncate(TOP_PERFORMER_COUNT);
    stats
}

/// Success rate and mean attempts for the POCUS-guided and landmark
/// partitions, computed independently. An empty partition yields 0 / 0.0.
pub fn success_rate_by_guidance(records: &[ProcedureRecord]) -> GuidanceComparison {
    let pocus: Vec<&ProcedureRecord> = records.iter().filter(|r| r.pocus_used).collect();
    let landmark: Vec<&ProcedureRecord> = records.iter().filter(|r| !r.pocus_used).collect();

    GuidanceComparison {
        pocus_success_rate: partition_success_rate(&pocus),
        pocus_avg_attempts: partition_mean_attempts(&pocus),
        landmark_success_rate: partition_success_rate(&landmark),
        landmark_avg_attempts: partition_mean_attempts(&landmark),
    }
}

/// Raw counts of successes and failures.
pub fn outcome_distribution(records: &[ProcedureRecord]) -> OutcomeDistribution {
    let success = records.iter().filter(|r| r.succeeded()).count();
    OutcomeDistribution {
        success,
        failure: records.len() - success,
    }
}

/// Attempt counts for up to `n` of the most recent records, re-ordered so
/// the oldest of the window comes first (chart left-to-right).
///
/// `records` is assumed newest-first, as the store keeps it.
pub fn recent_attempts_trend(records: &[ProcedureRecord], n: usize) -> Vec<TrendPoint> {
    records
        .iter()
        .take(n)
        .rev()
        .map(|r| TrendPoint {
            label: r.patient_study_id.clone(),
            attempts: r.total_attempts,
        })
        .collect()
}

// ── Numeric helpers ──────────────────────────────────────────────────────────

/// `round(100 * numerator / denominator)`, 0 when the denominator is 0.
fn percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() as u32
}

fn mean_attempts(records: &[ProcedureRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: u64 = records.iter().map(|r| u64::from(r.total_attempts)).sum();
    round_one_decimal(sum as f64 / records.len() as f64)
}

fn partition_success_rate(records: &[&ProcedureRecord]) -> u32 {
    let successes = records
        .iter()
        .filter(|r| r.final_outcome == Outcome::Success)
        .count();
    percent(successes, records.len())
}

fn partition_mean_attempts(records: &[&ProcedureRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: u64 = records.iter().map(|r| u64::from(r.total_attempts)).sum();
    round_one_decimal(sum as f64 / records.len() as f64)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
