mod mapping;
mod normalizer;
mod parser;

use crate::workflows::screening::ApplicantRecord;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {err}"),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {err}"),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Importer turning an applicant roster CSV export into typed records via the
/// header alias mapping.
pub struct ApplicantRosterImporter;

impl ApplicantRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantRecord>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, RosterImportError> {
        let records = parser::parse_records(reader)?;
        Ok(records)
    }
}
