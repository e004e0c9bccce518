use std::path::PathBuf;

use eyre::Result;
use uuid::Uuid;

use ivtrack_core::models::{Outcome, ProcedureRecord, Provider, Room, Sex};
use ivtrack_core::{query, stats};
use ivtrack_storage::{RecordStore, kv, settings};

use crate::cli::{AddArgs, Cli, Command, SettingsCommand};

pub fn run(args: Cli) -> Result<()> {
    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => kv::default_data_dir()?,
    };

    match args.command {
        Command::Dashboard => dashboard(&data_dir),
        Command::Add(add_args) => add(&data_dir, add_args),
        Command::History { search } => history(&data_dir, search.as_deref()),
        Command::Delete { id } => delete(&data_dir, &id),
        Command::Analytics => analytics(&data_dir),
        Command::Export { out } => export(&data_dir, out),
        Command::Sync => sync(&data_dir),
        Command::Insights => insights(&data_dir),
        Command::Settings(cmd) => settings_view(&data_dir, cmd),
    }
}

// ── Dashboard ────────────────────────────────────────────────────────────────

fn dashboard(data_dir: &PathBuf) -> Result<()> {
    let store = RecordStore::open(data_dir.clone())?;
    let records = store.records();
    let cards = stats::dashboard_stats(records);

    println!("Clinical Overview");
    println!("  Total Procedures  {}", cards.total_procedures);
    println!("  Overall Success   {}%", cards.success_rate);
    println!("  Avg. Attempts     {:.1}", cards.avg_attempts);
    println!("  POCUS Usage       {}%", cards.pocus_usage);

    println!("\nRecent Procedures");
    if records.is_empty() {
        println!("  No procedure records found. Start by adding a new entry.");
    }
    for record in records.iter().take(5) {
        println!(
            "  {} | {} | {} | {}",
            record.vascular_access_type,
            record.final_outcome.as_str().to_uppercase(),
            record.provider_name,
            record.procedure_date_time,
        );
    }

    println!("\nTop Performers");
    let top = stats::top_performers(records);
    if top.is_empty() {
        println!("  Data pending clinical entries...");
    }
    for performer in top {
        println!(
            "  {}  {}% success ({} cases)",
            performer.provider, performer.rate, performer.count
        );
    }

    Ok(())
}

// ── Form ─────────────────────────────────────────────────────────────────────

fn add(data_dir: &PathBuf, args: AddArgs) -> Result<()> {
    let procedure_date_time = match &args.date_time {
        Some(s) => s.parse::<jiff::civil::DateTime>()?,
        None => jiff::Zoned::now().datetime(),
    };

    let record = ProcedureRecord {
        id: Uuid::new_v4(),
        provider_name: args.provider.parse::<Provider>()?,
        procedure_date_time,
        patient_study_id: args.study_id,
        patient_age_days: args.age_days,
        patient_sex: args.sex.as_deref().map(str::parse::<Sex>).transpose()?,
        medical_conditions: args.conditions,
        room_number: args.room.parse::<Room>()?,
        current_weight_grams: args.weight_grams,
        corrected_gestational_age_weeks: args.gestational_age,
        vascular_access_type: args.access_type.parse()?,
        pocus_used: args.pocus,
        total_attempts: args.attempts,
        final_outcome: args.outcome.parse::<Outcome>()?,
        comments: args.comments,
        timestamp: jiff::Timestamp::now(),
    };

    let id = record.id;
    let mut store = RecordStore::open(data_dir.clone())?;
    store.add(record)?;

    println!("Recorded procedure {id} ({} total).", store.len());
    Ok(())
}

// ── History ──────────────────────────────────────────────────────────────────

fn history(data_dir: &PathBuf, search: Option<&str>) -> Result<()> {
    let store = RecordStore::open(data_dir.clone())?;
    let filtered = query::search(store.records(), search.unwrap_or(""));

    println!("Procedure Logs ({} of {} records)", filtered.len(), store.len());
    if filtered.is_empty() {
        println!("No matching procedure records found.");
        return Ok(());
    }

    for record in filtered {
        println!(
            "{}  {}  {}  {}  {}  POCUS:{}  attempts:{}  {}",
            record.id,
            record.procedure_date_time.date(),
            record.patient_study_id,
            record.provider_name,
            record.vascular_access_type,
            if record.pocus_used { "yes" } else { "no" },
            record.total_attempts,
            record.final_outcome,
        );
    }

    Ok(())
}

fn delete(data_dir: &PathBuf, id: &str) -> Result<()> {
    let id = Uuid::parse_str(id)?;
    let mut store = RecordStore::open(data_dir.clone())?;

    if store.remove(id)? {
        println!("Deleted record {id}.");
    } else {
        println!("No record with id {id}.");
    }
    Ok(())
}

// ── Analytics ────────────────────────────────────────────────────────────────

fn analytics(data_dir: &PathBuf) -> Result<()> {
    let store = RecordStore::open(data_dir.clone())?;
    let records = store.records();

    if records.is_empty() {
        println!("Insufficient data to generate analytics.");
        return Ok(());
    }

    println!("Success Rate by Provider (%)");
    for group in stats::success_rate_by_provider(records) {
        println!("  {}  {}% ({} cases)", group.provider, group.rate, group.count);
    }

    let guidance = stats::success_rate_by_guidance(records);
    println!("\nPOCUS vs. Landmark Success");
    println!(
        "  POCUS Guidance     {}% success, {:.1} avg attempts",
        guidance.pocus_success_rate, guidance.pocus_avg_attempts
    );
    println!(
        "  Standard Landmark  {}% success, {:.1} avg attempts",
        guidance.landmark_success_rate, guidance.landmark_avg_attempts
    );

    let outcomes = stats::outcome_distribution(records);
    println!("\nTotal Outcome Distribution");
    println!("  Success  {}", outcomes.success);
    println!("  Failure  {}", outcomes.failure);

    println!("\nAttempts Trend (last {})", stats::TREND_WINDOW);
    for point in stats::recent_attempts_trend(records, stats::TREND_WINDOW) {
        println!("  {}  {}", point.label, point.attempts);
    }

    Ok(())
}

// ── Adapters ─────────────────────────────────────────────────────────────────

fn export(data_dir: &PathBuf, out: Option<PathBuf>) -> Result<()> {
    let store = RecordStore::open(data_dir.clone())?;
    let out_dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let path = ivtrack_export::export_to_file(store.records(), &out_dir)?;
    println!("Exported {} records to {}.", store.len(), path.display());
    Ok(())
}

fn sync(data_dir: &PathBuf) -> Result<()> {
    let store = RecordStore::open(data_dir.clone())?;
    let Some(url) = settings::load_webhook_url(data_dir)? else {
        eyre::bail!("no webhook URL configured; set one with `ivtrack settings set-webhook <url>`");
    };

    let report = ivtrack_sync::sync_to_sheet(&url, store.records())?;
    if report.sent == 0 {
        println!("No entries to sync.");
    } else {
        println!("Sync signal sent ({} records).", report.sent);
    }
    Ok(())
}

fn insights(data_dir: &PathBuf) -> Result<()> {
    let store = RecordStore::open(data_dir.clone())?;
    println!("{}", ivtrack_insight::insights_or_fallback(store.records()));
    Ok(())
}

// ── Settings ─────────────────────────────────────────────────────────────────

fn settings_view(data_dir: &PathBuf, cmd: SettingsCommand) -> Result<()> {
    match cmd {
        SettingsCommand::Show => {
            match settings::load_webhook_url(data_dir)? {
                Some(url) => println!("Webhook URL: {url}"),
                None => println!("No webhook URL configured."),
            }
        }
        SettingsCommand::SetWebhook { url } => {
            settings::save_webhook_url(data_dir, &url)?;
            println!("Webhook URL saved.");
        }
        SettingsCommand::Script => {
            println!("{}", ivtrack_sync::APPS_SCRIPT_TEMPLATE);
        }
    }
    Ok(())
}
