//! Directory session — the seam between the pure core and the UI binding.
//!
//! The host (DOM glue, TUI, test harness) owns rendering and event wiring;
//! the session owns the loaded store, the current criteria and the injected
//! address bar. Each operation maps to one host event and runs to completion
//! synchronously:
//!
//! - user events (typing + Enter, checkbox/radio toggle, suggestion click)
//!   go through [`DirectorySession::set_criteria`], which re-encodes the
//!   location;
//! - back/forward navigation goes through [`DirectorySession::navigated`],
//!   which decodes without re-encoding to avoid a history loop.

use crate::error::DirectoryError;
use crate::filter;
use crate::models::{DoctorRecord, FilterCriteria};
use crate::store::{RecordSource, RecordStore};
use crate::suggest;
use crate::urlstate;

/// The injected address bar. Last writer wins; all mutation happens on the
/// single event-processing thread.
pub trait LocationStore {
    /// Current query string, with or without a leading `?`.
    fn query(&self) -> String;

    /// Replace the query string with a freshly encoded one.
    fn push(&mut self, query: &str);
}

/// In-memory address bar for tests and headless hosts.
#[derive(Debug, Default)]
pub struct InMemoryLocation {
    query: String,
}

impl InMemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

impl LocationStore for InMemoryLocation {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn push(&mut self, query: &str) {
        self.query = query.to_string();
    }
}

/// One browsing session over the doctor directory.
pub struct DirectorySession {
    store: RecordStore,
    criteria: FilterCriteria,
    location: Box<dyn LocationStore>,
}

impl DirectorySession {
    /// Load the feed once and restore criteria from the initial location.
    ///
    /// Startup decodes but does not re-encode, matching navigation: the
    /// address bar already holds the state being restored.
    pub fn start(
        source: &dyn RecordSource,
        location: Box<dyn LocationStore>,
    ) -> Result<Self, DirectoryError> {
        let store = RecordStore::load(source)?;
        let criteria = urlstate::decode(&location.query());
        Ok(Self {
            store,
            criteria,
            location,
        })
    }

    /// Current filtered, sorted view of the records.
    pub fn results(&self) -> Vec<&DoctorRecord> {
        filter::apply(self.store.records(), &self.criteria)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Specialty labels for the checkbox list, sorted for display.
    pub fn specialties(&self) -> &[String] {
        self.store.specialties()
    }

    /// Autocomplete entries for the current search box content.
    pub fn suggestions(&self, partial: &str) -> Vec<&str> {
        suggest::suggest(self.store.records(), partial)
    }

    /// User event path: adopt new criteria and re-encode the location.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.location.push(&urlstate::encode(&self.criteria));
    }

    /// Back/forward path: re-read criteria from the location. No re-encode.
    pub fn navigated(&mut self) {
        self.criteria = urlstate::decode(&self.location.query());
    }

    /// The query string currently held by the injected location.
    pub fn location_query(&self) -> String {
        self.location.query()
    }
}
