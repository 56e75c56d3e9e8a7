//! Autocomplete engine — top-N name matches for the search box.
//!
//! No ranking: the first matches in feed order win, which keeps suggestions
//! stable while the user types.

use crate::config;
use crate::models::DoctorRecord;

/// Names of the first [`config::MAX_SUGGESTIONS`] records whose name
/// contains `partial` case-insensitively. Empty input means no dropdown,
/// so an empty input returns nothing.
pub fn suggest<'a>(records: &'a [DoctorRecord], partial: &str) -> Vec<&'a str> {
    if partial.is_empty() {
        return Vec::new();
    }
    let needle = partial.to_lowercase();

    records
        .iter()
        .filter_map(|record| record.name.as_deref())
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(config::MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<DoctorRecord> {
        names
            .iter()
            .map(|name| DoctorRecord {
                name: Some(name.to_string()),
                specialties: None,
                experience: None,
                fees: None,
                video_consultation: None,
                in_clinic: None,
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_no_suggestions() {
        let records = named(&["A. Rao", "B. Iyer"]);
        assert!(suggest(&records, "").is_empty());
    }

    #[test]
    fn never_more_than_three() {
        let records = named(&["Dr. Rao", "Dr. Raote", "Dr. Raorane", "Dr. Raoji", "Dr. Rao Jr."]);
        let suggestions = suggest(&records, "rao");
        assert_eq!(suggestions, ["Dr. Rao", "Dr. Raote", "Dr. Raorane"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let records = named(&["Dr. SHARMA", "Dr. sharma"]);
        assert_eq!(suggest(&records, "Sharma"), ["Dr. SHARMA", "Dr. sharma"]);
    }

    #[test]
    fn records_without_names_are_skipped() {
        let mut records = named(&["A. Rao"]);
        records.insert(
            0,
            DoctorRecord {
                name: None,
                specialties: None,
                experience: None,
                fees: None,
                video_consultation: None,
                in_clinic: None,
            },
        );
        assert_eq!(suggest(&records, "rao"), ["A. Rao"]);
    }

    #[test]
    fn feed_order_breaks_ties() {
        let records = named(&["B. Iyer", "A. Iyer"]);
        assert_eq!(suggest(&records, "iyer"), ["B. Iyer", "A. Iyer"]);
    }
}
