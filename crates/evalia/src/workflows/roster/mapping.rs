use super::normalizer::normalize_header;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical applicant fields a roster column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RosterColumn {
    Name,
    Email,
    Position,
    WeightKg,
    HeightCm,
    Experience,
}

static HEADER_MAP: OnceLock<HashMap<String, RosterColumn>> = OnceLock::new();

pub(crate) fn column_for_normalized(normalized_header: &str) -> Option<RosterColumn> {
    header_map().get(normalized_header).copied()
}

fn header_map() -> &'static HashMap<String, RosterColumn> {
    HEADER_MAP.get_or_init(|| {
        const HEADER_TO_COLUMN: &[(&str, RosterColumn)] = &[
            ("name", RosterColumn::Name),
            ("full name", RosterColumn::Name),
            ("applicant name", RosterColumn::Name),
            ("ชื่อ", RosterColumn::Name),
            ("ชื่อ-นามสกุล", RosterColumn::Name),
            ("email", RosterColumn::Email),
            ("e-mail", RosterColumn::Email),
            ("email address", RosterColumn::Email),
            ("อีเมล", RosterColumn::Email),
            ("position", RosterColumn::Position),
            ("role", RosterColumn::Position),
            ("job title", RosterColumn::Position),
            ("applied position", RosterColumn::Position),
            ("ตำแหน่ง", RosterColumn::Position),
            ("ตำแหน่งที่สมัคร", RosterColumn::Position),
            ("weight kg", RosterColumn::WeightKg),
            ("weight", RosterColumn::WeightKg),
            ("weight (kg)", RosterColumn::WeightKg),
            ("น้ำหนัก", RosterColumn::WeightKg),
            ("น้ำหนัก (กก.)", RosterColumn::WeightKg),
            ("height cm", RosterColumn::HeightCm),
            ("height", RosterColumn::HeightCm),
            ("height (cm)", RosterColumn::HeightCm),
            ("ส่วนสูง", RosterColumn::HeightCm),
            ("ส่วนสูง (ซม.)", RosterColumn::HeightCm),
            ("experience years", RosterColumn::Experience),
            ("experience", RosterColumn::Experience),
            ("years of experience", RosterColumn::Experience),
            ("work experience", RosterColumn::Experience),
            ("ประสบการณ์", RosterColumn::Experience),
            ("ประสบการณ์ (ปี)", RosterColumn::Experience),
        ];

        let mut map = HashMap::with_capacity(HEADER_TO_COLUMN.len());
        for (header, column) in HEADER_TO_COLUMN {
            map.insert(normalize_header(header), *column);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(header: &str) -> Option<RosterColumn> {
    let normalized = normalize_header(header);
    column_for_normalized(&normalized)
}
