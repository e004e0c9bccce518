use ivtrack_core::models::{AccessType, Outcome, ProcedureRecord, Provider, Room};
use ivtrack_insight::gemini::NEED_MORE_DATA_MESSAGE;
use ivtrack_insight::generate_insights;
use ivtrack_insight::summary::{build_prompt, summarize};

fn record(weight: Option<f64>) -> ProcedureRecord {
    ProcedureRecord {
        id: uuid::Uuid::new_v4(),
        provider_name: Provider::Barber,
        procedure_date_time: "2026-04-08T07:45:00".parse().unwrap(),
        patient_study_id: "Study-003".to_string(),
        patient_age_days: Some(21),
        patient_sex: None,
        medical_conditions: Some("should not be sent".to_string()),
        room_number: Room::PodC,
        current_weight_grams: weight,
        corrected_gestational_age_weeks: None,
        vascular_access_type: AccessType::PiccLinePlacement,
        pocus_used: true,
        total_attempts: 2,
        final_outcome: Outcome::Success,
        comments: "should not be sent either".to_string(),
        timestamp: jiff::Timestamp::now(),
    }
}

#[test]
fn summary_carries_only_the_analysis_fields() {
    let summaries = summarize(&[record(Some(880.0))]);
    let json = serde_json::to_value(&summaries).unwrap();

    assert_eq!(json[0]["provider"], "Dr. Barber");
    assert_eq!(json[0]["type"], "PICC Line Placement");
    assert_eq!(json[0]["pocus"], true);
    assert_eq!(json[0]["attempts"], 2);
    assert_eq!(json[0]["outcome"], "Success");
    assert_eq!(json[0]["weight"], 880.0);

    let obj = json[0].as_object().unwrap();
    assert_eq!(obj.len(), 6);
    assert!(!obj.contains_key("patientStudyId"));
    assert!(!obj.contains_key("comments"));
}

#[test]
fn summary_omits_missing_weight() {
    let summaries = summarize(&[record(None)]);
    let json = serde_json::to_value(&summaries).unwrap();
    assert!(!json[0].as_object().unwrap().contains_key("weight"));
}

#[test]
fn prompt_embeds_the_summary_and_focus_points() {
    let prompt = build_prompt("[{\"provider\":\"Dr. Barber\"}]");

    assert!(prompt.contains("[{\"provider\":\"Dr. Barber\"}]"));
    assert!(prompt.contains("POCUS usage"));
    assert!(prompt.contains("training needs"));
    assert!(prompt.contains("bullet points"));
}

#[test]
fn fewer_than_three_records_short_circuits_without_a_call() {
    let records = vec![record(None), record(None)];
    // Two records: answered locally, no API key needed.
    let message = generate_insights(&records).unwrap();
    assert_eq!(message, NEED_MORE_DATA_MESSAGE);
}
