use super::mapping::{column_for_normalized, RosterColumn};
use super::normalizer::normalize_header;
use crate::workflows::screening::{ApplicantRecord, ExperienceField};
use std::io::Read;

/// Parse a roster CSV into applicant records, row order preserved. Only
/// structural CSV failures abort; unusable cells degrade to `None` fields.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<Option<RosterColumn>> = csv_reader
        .headers()?
        .iter()
        .map(|header| column_for_normalized(&normalize_header(header)))
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = ApplicantRecord::default();

        for (index, column) in columns.iter().enumerate() {
            let Some(column) = column else { continue };
            let Some(cell) = row.get(index) else { continue };
            apply_cell(&mut record, *column, cell);
        }

        records.push(record);
    }

    Ok(records)
}

fn apply_cell(record: &mut ApplicantRecord, column: RosterColumn, cell: &str) {
    let cell = cell.trim();
    if cell.is_empty() {
        return;
    }

    match column {
        RosterColumn::Name => record.name = Some(cell.to_string()),
        RosterColumn::Email => record.email = Some(cell.to_string()),
        RosterColumn::Position => record.position = Some(cell.to_string()),
        RosterColumn::WeightKg => record.weight_kg = parse_measurement(cell),
        RosterColumn::HeightCm => record.height_cm = parse_measurement(cell),
        RosterColumn::Experience => record.experience = parse_experience(cell),
    }
}

/// Positive finite number or nothing; "72kg"-style suffixes are not parsed.
fn parse_measurement(cell: &str) -> Option<f64> {
    cell.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Numeric year counts stay numeric; anything else is kept verbatim as a band
/// label for the scorer's band table.
fn parse_experience(cell: &str) -> Option<ExperienceField> {
    match cell.parse::<f64>() {
        Ok(years) if years.is_finite() && years >= 0.0 => Some(ExperienceField::Years(years)),
        Ok(_) => None,
        Err(_) => Some(ExperienceField::Label(cell.to_string())),
    }
}

#[cfg(test)]
pub(crate) fn parse_experience_for_tests(cell: &str) -> Option<ExperienceField> {
    parse_experience(cell)
}
