//! Import-focused integration checks: header aliases across languages and
//! export styles, and graceful degradation of user-controlled cells.

use evalia::workflows::roster::{ApplicantRosterImporter, RosterImportError};
use evalia::workflows::screening::ExperienceField;
use std::io::Cursor;

#[test]
fn english_and_thai_headers_map_to_the_same_fields() {
    let english = "Name,Position,Weight_kg,Height_cm,Experience_Years\n\
Anna,Analyst,70,175,6\n";
    let thai = "ชื่อ,ตำแหน่ง,น้ำหนัก,ส่วนสูง,ประสบการณ์\n\
Anna,Analyst,70,175,6\n";

    let from_english =
        ApplicantRosterImporter::from_reader(Cursor::new(english)).expect("english imports");
    let from_thai = ApplicantRosterImporter::from_reader(Cursor::new(thai)).expect("thai imports");

    assert_eq!(from_english, from_thai);
    assert_eq!(from_english[0].weight_kg, Some(70.0));
}

#[test]
fn headers_with_bom_and_spacing_variants_still_map() {
    let csv = "\u{feff}Full Name,weight (kg),height (cm),Years of Experience\n\
Boris,82.5,181,2\n";

    let records = ApplicantRosterImporter::from_reader(Cursor::new(csv)).expect("imports");

    assert_eq!(records[0].name.as_deref(), Some("Boris"));
    assert_eq!(records[0].weight_kg, Some(82.5));
    assert_eq!(records[0].height_cm, Some(181.0));
    assert_eq!(records[0].experience, Some(ExperienceField::Years(2.0)));
}

#[test]
fn categorical_experience_cells_survive_as_labels() {
    let csv = "Name,Experience\nCara,more than 10 years\nDana,7-10 years\n";

    let records = ApplicantRosterImporter::from_reader(Cursor::new(csv)).expect("imports");

    assert_eq!(
        records[0].experience,
        Some(ExperienceField::Label("more than 10 years".to_string()))
    );
    assert_eq!(
        records[1].experience,
        Some(ExperienceField::Label("7-10 years".to_string()))
    );
}

#[test]
fn unusable_cells_become_absent_fields_not_errors() {
    let csv = "Name,Weight_kg,Height_cm,Experience_Years,Email\n\
Elin,ninety,0,-1,\n";

    let records = ApplicantRosterImporter::from_reader(Cursor::new(csv)).expect("imports");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].weight_kg, None);
    assert_eq!(records[0].height_cm, None);
    assert_eq!(records[0].experience, None);
    assert_eq!(records[0].email, None);
}

#[test]
fn missing_files_surface_as_io_errors() {
    let error = ApplicantRosterImporter::from_path("./no-such-roster.csv")
        .expect_err("import must fail");

    match error {
        RosterImportError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
