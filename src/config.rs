/// Application-level constants
pub const APP_NAME: &str = "Medifind";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The static doctor feed consumed once at session start.
pub const FEED_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Upper bound on autocomplete entries shown below the search box.
pub const MAX_SUGGESTIONS: usize = 3;

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medifind=info"
}
