use ivtrack_core::models::{AccessType, Outcome, ProcedureRecord, Provider, Room};
use ivtrack_core::stats::{
    average_attempts, dashboard_stats, outcome_distribution, overall_success_rate,
    pocus_usage_rate, recent_attempts_trend, success_rate_by_guidance, success_rate_by_provider,
    top_performers,
};

fn record(provider: Provider, attempts: u32, outcome: Outcome, pocus: bool) -> ProcedureRecord {
    ProcedureRecord {
        id: uuid::Uuid::new_v4(),
        provider_name: provider,
        procedure_date_time: "2026-03-14T08:30:00".parse().unwrap(),
        patient_study_id: format!("Study-{attempts:03}"),
        patient_age_days: None,
        patient_sex: None,
        medical_conditions: None,
        room_number: Room::Nicu1,
        current_weight_grams: None,
        corrected_gestational_age_weeks: None,
        vascular_access_type: AccessType::PivInsertion,
        pocus_used: pocus,
        total_attempts: attempts,
        final_outcome: outcome,
        comments: String::new(),
        timestamp: jiff::Timestamp::now(),
    }
}

#[test]
fn empty_list_yields_all_zeros() {
    let records: Vec<ProcedureRecord> = vec![];

    assert_eq!(overall_success_rate(&records), 0);
    assert_eq!(average_attempts(&records), 0.0);
    assert_eq!(pocus_usage_rate(&records), 0);
    assert!(success_rate_by_provider(&records).is_empty());
    assert!(top_performers(&records).is_empty());
    assert!(recent_attempts_trend(&records, 10).is_empty());

    let guidance = success_rate_by_guidance(&records);
    assert_eq!(guidance.pocus_success_rate, 0);
    assert_eq!(guidance.pocus_avg_attempts, 0.0);
    assert_eq!(guidance.landmark_success_rate, 0);
    assert_eq!(guidance.landmark_avg_attempts, 0.0);
}

/// The worked example from the design review: two records for provider A
/// (one success, one failure), one success for provider B.
#[test]
fn mixed_list_matches_hand_computed_figures() {
    let records = vec![
        record(Provider::Barber, 1, Outcome::Success, false),
        record(Provider::Barber, 3, Outcome::Failure, false),
        record(Provider::Fish, 2, Outcome::Success, true),
    ];

    // round(100 * 2/3) = 67
    assert_eq!(overall_success_rate(&records), 67);
    assert_eq!(average_attempts(&records), 2.0);
    // round(100 * 1/3) = 33
    assert_eq!(pocus_usage_rate(&records), 33);

    let by_provider = success_rate_by_provider(&records);
    assert_eq!(by_provider.len(), 2);
    assert_eq!(by_provider[0].provider, Provider::Barber);
    assert_eq!(by_provider[0].rate, 50);
    assert_eq!(by_provider[0].count, 2);
    assert_eq!(by_provider[1].provider, Provider::Fish);
    assert_eq!(by_provider[1].rate, 100);
    assert_eq!(by_provider[1].count, 1);

    let top = top_performers(&records);
    assert_eq!(top[0].provider, Provider::Fish);
    assert_eq!(top[0].rate, 100);
    assert_eq!(top[1].provider, Provider::Barber);
    assert_eq!(top[1].rate, 50);
}

#[test]
fn success_rate_stays_within_bounds() {
    let all_failures = vec![
        record(Provider::Wang, 2, Outcome::Failure, false),
        record(Provider::Wang, 4, Outcome::Failure, true),
    ];
    assert_eq!(overall_success_rate(&all_failures), 0);

    let all_successes = vec![
        record(Provider::Wang, 1, Outcome::Success, true),
        record(Provider::Wang, 1, Outcome::Success, true),
    ];
    assert_eq!(overall_success_rate(&all_successes), 100);
}

#[test]
fn average_attempts_times_count_recovers_sum_within_rounding() {
    let records = vec![
        record(Provider::Lopez, 1, Outcome::Success, false),
        record(Provider::Lopez, 2, Outcome::Failure, false),
        record(Provider::Lopez, 4, Outcome::Success, false),
    ];
    let sum: u32 = records.iter().map(|r| r.total_attempts).sum();
    let mean = average_attempts(&records);

    // One fractional digit of display rounding allows at most 0.05 per record.
    assert!((mean * records.len() as f64 - f64::from(sum)).abs() <= 0.05 * records.len() as f64);
}

#[test]
fn provider_grouping_partitions_the_list() {
    let records = vec![
        record(Provider::Hansen, 1, Outcome::Success, false),
        record(Provider::Lopez, 2, Outcome::Failure, true),
        record(Provider::Hansen, 3, Outcome::Success, false),
        record(Provider::Manzano, 1, Outcome::Success, true),
    ];

    let groups = success_rate_by_provider(&records);
    let total: usize = groups.iter().map(|g| g.count).sum();
    assert_eq!(total, records.len());

    // Every provider appears exactly once, in first-seen order.
    let providers: Vec<Provider> = groups.iter().map(|g| g.provider).collect();
    assert_eq!(
        providers,
        vec![Provider::Hansen, Provider::Lopez, Provider::Manzano]
    );
}

#[test]
fn top_performers_order_is_rate_then_count_descending() {
    // Hansen: 2/2 (100%), Fish: 1/1 (100%), Lopez: 1/2 (50%).
    // Hansen outranks Fish on case count at the same rate.
    let records = vec![
        record(Provider::Fish, 1, Outcome::Success, true),
        record(Provider::Lopez, 2, Outcome::Failure, false),
        record(Provider::Hansen, 1, Outcome::Success, true),
        record(Provider::Hansen, 2, Outcome::Success, true),
        record(Provider::Lopez, 1, Outcome::Success, false),
    ];

    let top = top_performers(&records);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].provider, Provider::Hansen);
    assert_eq!(top[1].provider, Provider::Fish);
    assert_eq!(top[2].provider, Provider::Lopez);

    for pair in top.windows(2) {
        assert!(
            pair[0].rate > pair[1].rate
                || (pair[0].rate == pair[1].rate && pair[0].count >= pair[1].count)
        );
    }
}

#[test]
fn top_performers_truncates_to_three() {
    let records = vec![
        record(Provider::Barber, 1, Outcome::Success, false),
        record(Provider::Fish, 1, Outcome::Success, false),
        record(Provider::Hansen, 1, Outcome::Success, false),
        record(Provider::Lopez, 1, Outcome::Success, false),
        record(Provider::Manzano, 1, Outcome::Success, false),
    ];
    assert_eq!(top_performers(&records).len(), 3);
}

#[test]
fn pocus_and_landmark_shares_cover_the_whole_list() {
    let records = vec![
        record(Provider::Wang, 1, Outcome::Success, true),
        record(Provider::Wang, 2, Outcome::Failure, false),
        record(Provider::Wang, 1, Outcome::Success, false),
    ];

    let pocus = pocus_usage_rate(&records);
    let landmark_count = records.iter().filter(|r| !r.pocus_used).count();
    let landmark = (landmark_count as f64 / records.len() as f64 * 100.0).round() as u32;

    // Within rounding, the two shares sum to 100%.
    let total = pocus + landmark;
    assert!((99..=101).contains(&total), "shares summed to {total}");
}

#[test]
fn guidance_partitions_are_computed_independently() {
    let records = vec![
        record(Provider::Barber, 1, Outcome::Success, true),
        record(Provider::Barber, 2, Outcome::Success, true),
        record(Provider::Barber, 5, Outcome::Failure, false),
    ];

    let guidance = success_rate_by_guidance(&records);
    assert_eq!(guidance.pocus_success_rate, 100);
    assert_eq!(guidance.pocus_avg_attempts, 1.5);
    assert_eq!(guidance.landmark_success_rate, 0);
    assert_eq!(guidance.landmark_avg_attempts, 5.0);
}

#[test]
fn guidance_with_one_empty_partition_does_not_divide_by_zero() {
    let records = vec![
        record(Provider::Barber, 2, Outcome::Success, true),
        record(Provider::Fish, 3, Outcome::Failure, true),
    ];

    let guidance = success_rate_by_guidance(&records);
    assert_eq!(guidance.pocus_success_rate, 50);
    assert_eq!(guidance.pocus_avg_attempts, 2.5);
    assert_eq!(guidance.landmark_success_rate, 0);
    assert_eq!(guidance.landmark_avg_attempts, 0.0);
}

#[test]
fn outcome_distribution_counts_raw_totals() {
    let records = vec![
        record(Provider::Barber, 1, Outcome::Success, false),
        record(Provider::Fish, 2, Outcome::Failure, false),
        record(Provider::Fish, 1, Outcome::Failure, true),
    ];

    let dist = outcome_distribution(&records);
    assert_eq!(dist.success, 1);
    assert_eq!(dist.failure, 2);
    assert_eq!(dist.success + dist.failure, records.len());
}

#[test]
fn trend_takes_window_head_and_reverses_to_chronological() {
    // Newest-first list: Study-004 (newest, 4 attempts) .. Study-001 (oldest).
    let records: Vec<ProcedureRecord> = (1..=4)
        .rev()
        .map(|i| {
            let mut r = record(Provider::Wang, i, Outcome::Success, false);
            r.patient_study_id = format!("Study-{i:03}");
            r
        })
        .collect();

    let trend = recent_attempts_trend(&records, 3);
    assert_eq!(trend.len(), 3);
    // Window is the three newest (attempts 4, 3, 2), returned oldest-first.
    assert_eq!(trend[0].attempts, 2);
    assert_eq!(trend[1].attempts, 3);
    assert_eq!(trend[2].attempts, 4);
    assert_eq!(trend[2].label, "Study-004");
}

#[test]
fn trend_window_larger_than_list_returns_everything() {
    let records = vec![
        record(Provider::Barber, 2, Outcome::Success, false),
        record(Provider::Barber, 1, Outcome::Success, false),
    ];
    assert_eq!(recent_attempts_trend(&records, 10).len(), 2);
}

#[test]
fn dashboard_stats_agree_with_individual_figures() {
    let records = vec![
        record(Provider::Barber, 1, Outcome::Success, true),
        record(Provider::Fish, 3, Outcome::Failure, false),
    ];

    let stats = dashboard_stats(&records);
    assert_eq!(stats.total_procedures, 2);
    assert_eq!(stats.success_rate, overall_success_rate(&records));
    assert_eq!(stats.avg_attempts, average_attempts(&records));
    assert_eq!(stats.pocus_usage, pocus_usage_rate(&records));
}

#[test]
fn rounding_is_half_away_from_zero() {
    // 1 success of 8 → 12.5% → rounds to 13, not 12.
    let mut records = vec![record(Provider::Wang, 1, Outcome::Success, false)];
    for _ in 0..7 {
        records.push(record(Provider::Wang, 1, Outcome::Failure, false));
    }
    assert_eq!(overall_success_rate(&records), 13);
}
