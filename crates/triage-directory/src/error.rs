use thiserror::Error;

use crate::clinician::ClinicianId;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate clinician id: {0}")]
    DuplicateClinician(ClinicianId),
}
