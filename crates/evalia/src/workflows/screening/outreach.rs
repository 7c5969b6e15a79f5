use serde::Serialize;

use super::domain::{ApplicantRecord, ScoreResult, ScoredApplicant};

/// Presentation row for card-style rendering: levels with display labels plus
/// prebuilt outbound communication links.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantCardView {
    pub name: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub bmi: Option<f64>,
    pub health_level: &'static str,
    pub experience_level: &'static str,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
}

impl ApplicantCardView {
    pub fn from_scored(scored: &ScoredApplicant) -> Self {
        let ScoredApplicant { record, result } = scored;

        Self {
            name: record.display_name().to_string(),
            email: record.email.clone(),
            position: record.position.clone(),
            bmi: result.bmi,
            health_level: result.health_level.label(),
            experience_level: result.experience_level.label(),
            reason: result.reason.clone(),
            email_link: email_link(record, result),
            meeting_link: meeting_link(record),
        }
    }
}

/// `mailto:` compose link with a templated subject and body. `None` when the
/// record has no usable address.
pub fn email_link(record: &ApplicantRecord, result: &ScoreResult) -> Option<String> {
    let email = contact_address(record)?;

    let subject = "Regarding your application";
    let body = format!(
        "Hello {},\n\nThank you for applying{}. We have reviewed your profile (experience level: {}) and would like to discuss next steps with you.\n",
        record.display_name(),
        record
            .position
            .as_deref()
            .map(|position| format!(" for the {position} role"))
            .unwrap_or_default(),
        result.experience_level.label(),
    );

    Some(format!(
        "mailto:{email}?subject={}&body={}",
        percent_encode(subject),
        percent_encode(&body)
    ))
}

/// Calendar-template link for scheduling an interview with the applicant.
pub fn meeting_link(record: &ApplicantRecord) -> Option<String> {
    let email = contact_address(record)?;

    let title = format!("Interview with {}", record.display_name());
    Some(format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&add={}",
        percent_encode(&title),
        percent_encode(email)
    ))
}

fn contact_address(record: &ApplicantRecord) -> Option<&str> {
    record
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty() && email.contains('@'))
}

fn percent_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => {
                encoded.push('%');
                encoded.push(hex_digit(other >> 4));
                encoded.push(hex_digit(other & 0x0f));
            }
        }
    }
    encoded
}

fn hex_digit(value: u8) -> char {
    char::from_digit(u32::from(value), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}
