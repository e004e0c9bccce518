//! The procedure record and its closed string sets.
//!
//! Serde renames pin every enum to the exact strings the tracker has always
//! persisted, so JSON written by earlier versions (and received by the
//! spreadsheet webhook) stays readable without a migration step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// A clinician authorized to log procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "Dr. Barber")]
    Barber,
    #[serde(rename = "Dr. Fish")]
    Fish,
    #[serde(rename = "Dr. Hansen")]
    Hansen,
    #[serde(rename = "Dr. Lopez")]
    Lopez,
    #[serde(rename = "Dr. Manzano")]
    Manzano,
    #[serde(rename = "Dr. Wang")]
    Wang,
}

impl Provider {
    pub const ALL: [Provider; 6] = [
        Provider::Barber,
        Provider::Fish,
        Provider::Hansen,
        Provider::Lopez,
        Provider::Manzano,
        Provider::Wang,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Barber => "Dr. Barber",
            Provider::Fish => "Dr. Fish",
            Provider::Hansen => "Dr. Hansen",
            Provider::Lopez => "Dr. Lopez",
            Provider::Manzano => "Dr. Manzano",
            Provider::Wang => "Dr. Wang",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownProvider(s.to_string()))
    }
}

/// Physical location where the procedure took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "NICU 1")]
    Nicu1,
    #[serde(rename = "NICU 2")]
    Nicu2,
    #[serde(rename = "NICU 3")]
    Nicu3,
    #[serde(rename = "Pod A")]
    PodA,
    #[serde(rename = "Pod B")]
    PodB,
    #[serde(rename = "Pod C")]
    PodC,
}

impl Room {
    pub const ALL: [Room; 6] = [
        Room::Nicu1,
        Room::Nicu2,
        Room::Nicu3,
        Room::PodA,
        Room::PodB,
        Room::PodC,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Room::Nicu1 => "NICU 1",
            Room::Nicu2 => "NICU 2",
            Room::Nicu3 => "NICU 3",
            Room::PodA => "Pod A",
            Room::PodB => "Pod B",
            Room::PodC => "Pod C",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Room {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Room::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRoom(s.to_string()))
    }
}

/// Kind of vascular access attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessType {
    #[serde(rename = "PIV Insertion")]
    PivInsertion,
    #[serde(rename = "PICC Line Placement")]
    PiccLinePlacement,
    #[serde(rename = "Peripheral Arterial Line")]
    PeripheralArterialLine,
}

impl AccessType {
    pub const ALL: [AccessType; 3] = [
        AccessType::PivInsertion,
        AccessType::PiccLinePlacement,
        AccessType::PeripheralArterialLine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::PivInsertion => "PIV Insertion",
            AccessType::PiccLinePlacement => "PICC Line Placement",
            AccessType::PeripheralArterialLine => "Peripheral Arterial Line",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAccessType(s.to_string()))
    }
}

/// Final outcome of the procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(Outcome::Success),
            "Failure" => Ok(Outcome::Failure),
            other => Err(CoreError::UnknownOutcome(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            "Other" => Ok(Sex::Other),
            other => Err(CoreError::UnknownSex(other.to_string())),
        }
    }
}

/// One completed or attempted vascular-access procedure.
///
/// Records are immutable after creation: the store prepends new ones and
/// deletes by id, never edits in place. `procedure_date_time` is the
/// clinician-entered time of the procedure; `timestamp` is when the record
/// was created and is kept for record-keeping only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureRecord {
    pub id: Uuid,
    pub provider_name: Provider,
    pub procedure_date_time: jiff::civil::DateTime,
    pub patient_study_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patient_age_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patient_sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub medical_conditions: Option<String>,
    pub room_number: Room,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current_weight_grams: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub corrected_gestational_age_weeks: Option<f64>,
    pub vascular_access_type: AccessType,
    pub pocus_used: bool,
    /// Skin-puncture count, at least 1.
    pub total_attempts: u32,
    pub final_outcome: Outcome,
    pub comments: String,
    pub timestamp: jiff::Timestamp,
}

impl ProcedureRecord {
    pub fn succeeded(&self) -> bool {
        self.final_outcome == Outcome::Success
    }
}
