use serde::{Deserialize, Serialize};

/// One applicant as parsed from a roster row. Every field is optional: roster
/// columns are user-controlled and absence or a malformed cell degrades to
/// `None` rather than failing the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub experience: Option<ExperienceField>,
}

impl ApplicantRecord {
    /// Display name used by views and outreach templates.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Applicant")
    }
}

/// Experience as declared on the source form: a year count on some intake
/// forms, a categorical band label ("7-10 years", bilingual variants) on
/// others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExperienceField {
    Years(f64),
    Label(String),
}

/// Health indicator derived from the BMI check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLevel {
    High,
    Low,
    Unknown,
}

impl HealthLevel {
    pub const fn label(self) -> &'static str {
        match self {
            HealthLevel::High => "high",
            HealthLevel::Low => "low",
            HealthLevel::Unknown => "unknown",
        }
    }
}

/// Coarse suitability bucket derived from years of experience and keyword
/// signals in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    High,
    Mid,
    Low,
    Unknown,
}

impl ExperienceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::High => "high",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Low => "low",
            ExperienceLevel::Unknown => "unknown",
        }
    }
}

/// Outcome of scoring one applicant. Recomputed on every request and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Body mass index rounded to one decimal place; `None` when the inputs
    /// are missing or unusable.
    pub bmi: Option<f64>,
    pub health_level: HealthLevel,
    pub experience_level: ExperienceLevel,
    /// Display-only explanation trail. Not machine-parsed anywhere.
    pub reason: String,
}

/// The `(record, result)` pair handed to presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredApplicant {
    pub record: ApplicantRecord,
    pub result: ScoreResult,
}
