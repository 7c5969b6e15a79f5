use super::super::domain::{ExperienceField, ExperienceLevel, HealthLevel};
use super::config::ScoringConfig;

/// Body mass index from roster measurements, rounded to one decimal place.
/// Missing, non-finite, zero, or negative inputs all yield `None`.
pub(crate) fn compute_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg.filter(|value| value.is_finite() && *value > 0.0)?;
    let height_m = height_cm.filter(|value| value.is_finite() && *value > 0.0)? / 100.0;

    let bmi = weight / (height_m * height_m);
    if !bmi.is_finite() {
        return None;
    }

    Some((bmi * 10.0).round() / 10.0)
}

pub(crate) fn classify_health(bmi: Option<f64>, config: &ScoringConfig) -> (HealthLevel, String) {
    match bmi {
        None => (HealthLevel::Unknown, "BMI data is missing".to_string()),
        Some(value) if value > config.bmi_threshold => (
            HealthLevel::Low,
            format!("BMI {value:.1} exceeds {}", config.bmi_threshold),
        ),
        Some(value) => (
            HealthLevel::High,
            format!("BMI {value:.1} within normal range"),
        ),
    }
}

/// Reduce a declared experience field to a year count. Numeric declarations
/// are used as-is, band labels go through the configured band table, and
/// anything unusable counts as zero.
pub(crate) fn normalized_years(
    experience: Option<&ExperienceField>,
    config: &ScoringConfig,
) -> f64 {
    match experience {
        Some(ExperienceField::Years(years)) if years.is_finite() && *years >= 0.0 => *years,
        Some(ExperienceField::Label(label)) => {
            let normalized = normalize_label(label);
            config
                .experience_bands
                .iter()
                .find(|band| {
                    band.labels
                        .iter()
                        .any(|candidate| normalize_label(candidate) == normalized)
                })
                .map(|band| band.years)
                .unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

pub(crate) fn classify_experience(
    experience: Option<&ExperienceField>,
    free_text: &str,
    config: &ScoringConfig,
) -> (ExperienceLevel, String) {
    let years = normalized_years(experience, config);

    if years >= config.high_experience_years {
        return (
            ExperienceLevel::High,
            format!("experience over {} years", config.high_experience_years),
        );
    }
    if years >= config.mid_experience_years {
        return (
            ExperienceLevel::Mid,
            format!(
                "experience between {} and {} years",
                config.mid_experience_years, config.high_experience_years
            ),
        );
    }

    let haystack = free_text.to_lowercase();
    if let Some(word) = first_match(&haystack, &config.keywords.seniority) {
        return (ExperienceLevel::Mid, format!("keyword '{word}' found"));
    }
    if let Some(word) = first_match(&haystack, &config.keywords.support) {
        return (ExperienceLevel::Low, format!("keyword '{word}' found"));
    }

    (
        ExperienceLevel::Low,
        format!(
            "no significant keywords found, less than {} years experience",
            config.mid_experience_years
        ),
    )
}

fn first_match<'a>(haystack: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|keyword| !keyword.is_empty() && haystack.contains(&keyword.to_lowercase()))
}

/// Band labels arrive with inconsistent dashes, case, and stray whitespace
/// depending on which form produced them.
fn normalize_label(value: &str) -> String {
    let cleaned = value
        .replace(['\u{feff}', '\u{200b}'], "")
        .replace(['\u{2013}', '\u{2014}'], "-");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
pub(crate) fn normalize_label_for_tests(value: &str) -> String {
    normalize_label(value)
}
