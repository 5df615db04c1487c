use triage_core::models::recommendation::Recommendation;

use crate::clinician::{Availability, Clinician, ClinicianFilter};
use crate::directory::ClinicianDirectory;

/// Available clinicians in the recommended department, best rated first,
/// ties broken by experience.
pub fn referrals<'a>(
    directory: &'a dyn ClinicianDirectory,
    recommendation: &Recommendation,
) -> Vec<&'a Clinician> {
    let filter = ClinicianFilter {
        specialty: Some(recommendation.department),
        availability: Some(Availability::Available),
        ..ClinicianFilter::default()
    };
    let mut clinicians = directory.list(&filter);
    clinicians.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.experience.cmp(&a.experience))
    });
    clinicians
}
