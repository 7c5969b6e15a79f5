use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Rubric configuration for the applicant scorer: thresholds, the experience
/// band table, and the ordered keyword lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// BMI strictly above this value classifies the health indicator low.
    pub bmi_threshold: f64,
    /// Normalized years at or above this value classify experience high.
    pub high_experience_years: f64,
    /// Normalized years at or above this value classify experience mid.
    pub mid_experience_years: f64,
    /// Categorical form labels mapped to representative year counts, ordered
    /// from the highest band down.
    pub experience_bands: Vec<ExperienceBand>,
    pub keywords: KeywordTable,
}

/// One categorical experience band as it appears on intake forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBand {
    /// Accepted label spellings, compared after normalization.
    pub labels: Vec<String>,
    /// Representative year count for the band.
    pub years: f64,
}

/// Ordered, language-agnostic keyword lists scanned over free-text fields.
/// Order only decides which matched word the reason string reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    /// High-seniority titles; a match lifts experience to mid.
    pub seniority: Vec<String>,
    /// Support/junior titles; a match keeps experience low but names the word.
    pub support: Vec<String>,
}

impl ScoringConfig {
    /// The default rubric: majority rule-set across the legacy dashboard
    /// variants, with the per-variant keyword lists collapsed into one
    /// bilingual table.
    pub fn standard() -> Self {
        Self {
            bmi_threshold: 25.0,
            high_experience_years: 5.0,
            mid_experience_years: 2.0,
            experience_bands: vec![
                ExperienceBand {
                    labels: string_vec(&["more than 10 years", "10+ years", "มากกว่า 10 ปี"]),
                    years: 10.0,
                },
                ExperienceBand {
                    labels: string_vec(&["7-10 years", "7 to 10 years", "7-10 ปี"]),
                    years: 7.0,
                },
                ExperienceBand {
                    labels: string_vec(&["4-6 years", "4 to 6 years", "4-6 ปี"]),
                    years: 4.0,
                },
                ExperienceBand {
                    labels: string_vec(&["1-3 years", "1 to 3 years", "1-3 ปี"]),
                    years: 1.0,
                },
            ],
            keywords: KeywordTable {
                seniority: string_vec(&[
                    "lead",
                    "manager",
                    "senior",
                    "director",
                    "head",
                    "principal",
                    "supervisor",
                    "doctor",
                    "physician",
                    "nurse",
                    "หัวหน้า",
                    "ผู้จัดการ",
                    "อาวุโส",
                    "ผู้อำนวยการ",
                    "แพทย์",
                    "พยาบาล",
                ]),
                support: string_vec(&[
                    "assistant",
                    "support",
                    "junior",
                    "trainee",
                    "intern",
                    "ผู้ช่วย",
                    "ฝึกงาน",
                ]),
            },
        }
    }

    /// Load a rubric from a JSON rules file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoringConfigError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScoringConfigError> {
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn string_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Error raised while loading a scoring rules file.
#[derive(Debug, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("failed to read scoring rules: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scoring rules JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
