use std::collections::HashSet;

use crate::clinician::{Clinician, ClinicianFilter, ClinicianId};
use crate::error::DirectoryError;

/// Read-only access to the clinicians a screening can refer to.
pub trait ClinicianDirectory: Send + Sync {
    fn find_by_id(&self, id: ClinicianId) -> Option<&Clinician>;

    /// Clinicians matching `filter`, in directory order.
    fn list(&self, filter: &ClinicianFilter) -> Vec<&Clinician>;
}

/// A directory backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    clinicians: Vec<Clinician>,
}

impl InMemoryDirectory {
    pub fn new(clinicians: Vec<Clinician>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for clinician in &clinicians {
            if !seen.insert(clinician.id) {
                return Err(DirectoryError::DuplicateClinician(clinician.id));
            }
        }
        tracing::debug!(count = clinicians.len(), "clinician directory loaded");
        Ok(Self { clinicians })
    }

    /// Load a JSON array of clinicians.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let clinicians: Vec<Clinician> = serde_json::from_str(json)?;
        Self::new(clinicians)
    }

    pub fn len(&self) -> usize {
        self.clinicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clinicians.is_empty()
    }
}

impl ClinicianDirectory for InMemoryDirectory {
    fn find_by_id(&self, id: ClinicianId) -> Option<&Clinician> {
        self.clinicians.iter().find(|c| c.id == id)
    }

    fn list(&self, filter: &ClinicianFilter) -> Vec<&Clinician> {
        self.clinicians.iter().filter(|c| filter.matches(c)).collect()
    }
}
