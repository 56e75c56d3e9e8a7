//! Filter engine — pure function from (records, criteria) to an ordered view.
//!
//! Active predicates AND together; inactive ones impose no restriction.
//! A record missing a field an active predicate needs is excluded, not an
//! error. Sorting is stable, so equal-key records keep feed order.

use crate::models::{ConsultationMode, DoctorRecord, FilterCriteria, SortKey};

/// Apply the criteria to the record list and return the filtered, sorted view.
pub fn apply<'a>(records: &'a [DoctorRecord], criteria: &FilterCriteria) -> Vec<&'a DoctorRecord> {
    let name_query = criteria.name_query.to_lowercase();

    let mut results: Vec<&DoctorRecord> = records
        .iter()
        .filter(|record| matches(record, criteria, &name_query))
        .collect();

    match criteria.sort_key {
        SortKey::FeesAscending => {
            // Absent fee compares as 0; display still shows "not specified".
            results.sort_by(|a, b| a.fees.unwrap_or(0.0).total_cmp(&b.fees.unwrap_or(0.0)));
        }
        SortKey::ExperienceDescending => {
            results.sort_by(|a, b| {
                b.experience
                    .unwrap_or(0.0)
                    .total_cmp(&a.experience.unwrap_or(0.0))
            });
        }
        SortKey::Unset => {}
    }

    results
}

fn matches(record: &DoctorRecord, criteria: &FilterCriteria, name_query: &str) -> bool {
    if !name_query.is_empty() {
        match &record.name {
            Some(name) if name.to_lowercase().contains(name_query) => {}
            _ => return false,
        }
    }

    if !criteria.selected_specialties.is_empty() {
        let Some(specialties) = &record.specialties else {
            return false;
        };
        let any_match = criteria
            .selected_specialties
            .iter()
            .any(|selected| specialties.contains(selected));
        if !any_match {
            return false;
        }
    }

    match criteria.consultation_mode {
        ConsultationMode::Video if record.video_consultation != Some(true) => return false,
        ConsultationMode::Clinic if record.in_clinic != Some(true) => return false,
        _ => {}
    }

    true
}
