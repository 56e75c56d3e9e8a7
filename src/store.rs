//! Record store — the immutable per-session doctor list and specialty catalog.
//!
//! The feed is fetched exactly once; on any failure nothing is stored, so the
//! host can show a full-list error state instead of partial data. The fetch
//! itself sits behind the `RecordSource` trait so the core is testable
//! without a network.

use std::collections::BTreeSet;

use crate::config;
use crate::error::DirectoryError;
use crate::models::DoctorRecord;

/// The injected record feed.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<DoctorRecord>, DirectoryError>;
}

/// HTTP record source against a fixed JSON-array endpoint.
///
/// No retry and no timeout beyond the client default: a hung request leaves
/// the host in its loading state.
pub struct HttpRecordSource {
    feed_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRecordSource {
    pub fn new(feed_url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self {
            feed_url: feed_url.to_string(),
            client,
        }
    }

    /// Source pointing at the default campus feed.
    pub fn default_feed() -> Self {
        Self::new(config::FEED_URL)
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch(&self) -> Result<Vec<DoctorRecord>, DirectoryError> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| DirectoryError::Parse(e.to_string()))
    }
}

/// Mock record source for testing — returns a configurable outcome.
pub struct MockRecordSource {
    outcome: MockOutcome,
}

enum MockOutcome {
    Records(Vec<DoctorRecord>),
    Status(u16),
    Unreachable,
    Malformed,
}

impl MockRecordSource {
    pub fn with_records(records: Vec<DoctorRecord>) -> Self {
        Self {
            outcome: MockOutcome::Records(records),
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            outcome: MockOutcome::Status(status),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            outcome: MockOutcome::Unreachable,
        }
    }

    pub fn malformed() -> Self {
        Self {
            outcome: MockOutcome::Malformed,
        }
    }
}

impl RecordSource for MockRecordSource {
    fn fetch(&self) -> Result<Vec<DoctorRecord>, DirectoryError> {
        match &self.outcome {
            MockOutcome::Records(records) => Ok(records.clone()),
            MockOutcome::Status(status) => Err(DirectoryError::Status { status: *status }),
            MockOutcome::Unreachable => {
                Err(DirectoryError::Fetch("connection refused".to_string()))
            }
            MockOutcome::Malformed => {
                Err(DirectoryError::Parse("expected a JSON array".to_string()))
            }
        }
    }
}

/// The loaded, immutable session data: records in feed order plus the
/// derived specialty catalog.
pub struct RecordStore {
    records: Vec<DoctorRecord>,
    specialties: Vec<String>,
}

impl RecordStore {
    /// Fetch the feed once and derive the specialty catalog.
    pub fn load(source: &dyn RecordSource) -> Result<Self, DirectoryError> {
        let records = source.fetch()?;
        let specialties = derive_specialties(&records);
        tracing::info!(
            records = records.len(),
            specialties = specialties.len(),
            "doctor feed loaded"
        );
        Ok(Self {
            records,
            specialties,
        })
    }

    /// Records in original feed order.
    pub fn records(&self) -> &[DoctorRecord] {
        &self.records
    }

    /// Deduplicated specialty labels, sorted lexicographically for display.
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }
}

/// Collect every entry of every record's specialty list, skipping records
/// where the field is absent.
fn derive_specialties(records: &[DoctorRecord]) -> Vec<String> {
    let mut labels = BTreeSet::new();
    for record in records {
        if let Some(specialties) = &record.specialties {
            for label in specialties {
                labels.insert(label.clone());
            }
        }
    }
    labels.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, specialties: &[&str]) -> DoctorRecord {
        DoctorRecord {
            name: Some(name.to_string()),
            specialties: Some(specialties.iter().map(|s| s.to_string()).collect()),
            experience: None,
            fees: None,
            video_consultation: None,
            in_clinic: None,
        }
    }

    #[test]
    fn load_keeps_feed_order() {
        let source = MockRecordSource::with_records(vec![
            record("Dr. B", &[]),
            record("Dr. A", &[]),
        ]);
        let store = RecordStore::load(&source).unwrap();
        assert_eq!(store.records()[0].name.as_deref(), Some("Dr. B"));
        assert_eq!(store.records()[1].name.as_deref(), Some("Dr. A"));
    }

    #[test]
    fn catalog_is_deduplicated_and_sorted() {
        let source = MockRecordSource::with_records(vec![
            record("Dr. A", &["Orthopedist", "Dentist"]),
            record("Dr. B", &["Dentist", "Cardiologist"]),
        ]);
        let store = RecordStore::load(&source).unwrap();
        assert_eq!(
            store.specialties(),
            ["Cardiologist", "Dentist", "Orthopedist"]
        );
    }

    #[test]
    fn catalog_skips_records_without_specialties() {
        let mut bare = record("Dr. C", &[]);
        bare.specialties = None;
        let source =
            MockRecordSource::with_records(vec![bare, record("Dr. D", &["Dermatologist"])]);
        let store = RecordStore::load(&source).unwrap();
        assert_eq!(store.specialties(), ["Dermatologist"]);
    }

    #[test]
    fn status_failure_propagates_and_stores_nothing() {
        let source = MockRecordSource::failing_with_status(502);
        match RecordStore::load(&source) {
            Err(DirectoryError::Status { status }) => assert_eq!(status, 502),
            other => panic!("expected status error, got {:?}", other.map(|s| s.records().len())),
        }
    }

    #[test]
    fn transport_failure_is_a_fetch_error() {
        let source = MockRecordSource::unreachable();
        assert!(matches!(
            RecordStore::load(&source),
            Err(DirectoryError::Fetch(_))
        ));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let source = MockRecordSource::malformed();
        assert!(matches!(
            RecordStore::load(&source),
            Err(DirectoryError::Parse(_))
        ));
    }

    #[test]
    fn feed_payload_with_sparse_records_parses() {
        // Shape check on the raw feed format: records may omit any field.
        let body = r#"[
            {"name": "Dr. E", "fees": 250},
            {"specialties": ["ENT"], "in_clinic": true},
            {}
        ]"#;
        let records: Vec<DoctorRecord> = serde_json::from_str(body).unwrap();
        let catalog = derive_specialties(&records);
        assert_eq!(records.len(), 3);
        assert_eq!(catalog, ["ENT"]);
    }
}
