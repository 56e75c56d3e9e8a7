//! Medifind — a client-side doctor directory core.
//!
//! Fetches a static doctor list once per session, filters it by name,
//! specialty, consultation mode and sort order, and keeps the filter state
//! synchronized with an address-bar-like query string so result pages are
//! shareable and back/forward navigation restores state.
//!
//! The core is pure logic: the two I/O seams — the record feed and the
//! address bar — are the injected `RecordSource` and `LocationStore` traits,
//! so everything here is testable without a browser or a network.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod session;
pub mod store;
pub mod suggest;
pub mod urlstate;

pub use error::DirectoryError;
pub use models::{ConsultationMode, DoctorRecord, FilterCriteria, SortKey};
pub use session::{DirectorySession, InMemoryLocation, LocationStore};
pub use store::{HttpRecordSource, MockRecordSource, RecordSource, RecordStore};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts embedding the directory core.
///
/// Respects `RUST_LOG` when set, otherwise falls back to
/// [`config::default_log_filter`].
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
