//! URL state codec — bidirectional mapping between filter criteria and the
//! query string.
//!
//! `decode(&encode(&c)) == c` for every criteria value a user can reach.
//! Decoding is total: unknown keys and unrecognized `mode`/`sort` tokens are
//! ignored so a mangled shared link still renders something sensible.
//!
//! Known limitation: a comma inside a specialty label would corrupt the
//! comma-joined `specialties` value.

use url::form_urlencoded;

use crate::models::{ConsultationMode, FilterCriteria, SortKey};

/// Serialize criteria into a query string (no leading `?`).
///
/// Keys are emitted only for active fields, so default criteria encode to
/// the empty string. Specialty order follows selection order.
pub fn encode(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !criteria.name_query.is_empty() {
        query.append_pair("name", &criteria.name_query);
    }
    if !criteria.selected_specialties.is_empty() {
        query.append_pair("specialties", &criteria.selected_specialties.join(","));
    }
    if let Some(token) = criteria.consultation_mode.as_token() {
        query.append_pair("mode", token);
    }
    if let Some(token) = criteria.sort_key.as_token() {
        query.append_pair("sort", token);
    }

    query.finish()
}

/// Parse a query string (leading `?` accepted) into criteria.
///
/// Absent keys leave the field at its default. Values that do not parse are
/// logged and skipped, never an error.
pub fn decode(query: &str) -> FilterCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut criteria = FilterCriteria::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "name" => criteria.name_query = value.into_owned(),
            "specialties" => {
                if !value.is_empty() {
                    criteria.selected_specialties =
                        value.split(',').map(str::to_string).collect();
                }
            }
            "mode" => match ConsultationMode::from_token(&value) {
                Some(mode) => criteria.consultation_mode = mode,
                None => tracing::debug!(token = %value, "ignoring unknown mode token"),
            },
            "sort" => match SortKey::from_token(&value) {
                Some(sort) => criteria.sort_key = sort,
                None => tracing::debug!(token = %value, "ignoring unknown sort token"),
            },
            other => tracing::debug!(key = %other, "ignoring unknown query parameter"),
        }
    }

    criteria
}
