//! Filter criteria — the full set of user-chosen filter/sort parameters.
//!
//! `FilterCriteria` is the single mutable value of a session. It is always
//! derivable from the current query string and the query string from it
//! (see `urlstate`), which is what makes result pages shareable.

use serde::{Deserialize, Serialize};

/// Consultation mode restriction. `Unset` means no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationMode {
    #[default]
    Unset,
    Video,
    Clinic,
}

impl ConsultationMode {
    /// Wire token for the `mode` query parameter. `Unset` has none.
    pub fn as_token(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Video => Some("video"),
            Self::Clinic => Some("clinic"),
        }
    }

    /// Parse a `mode` token. Unknown tokens are `None`, never an error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "video" => Some(Self::Video),
            "clinic" => Some(Self::Clinic),
            _ => None,
        }
    }
}

/// Result ordering. `Unset` preserves feed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Unset,
    FeesAscending,
    ExperienceDescending,
}

impl SortKey {
    /// Wire token for the `sort` query parameter. `Unset` has none.
    pub fn as_token(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::FeesAscending => Some("fees"),
            Self::ExperienceDescending => Some("experience"),
        }
    }

    /// Parse a `sort` token. Unknown tokens are `None`, never an error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fees" => Some(Self::FeesAscending),
            "experience" => Some(Self::ExperienceDescending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match target. Empty = inactive.
    pub name_query: String,
    /// Selected specialty labels in selection order. Empty = no restriction.
    pub selected_specialties: Vec<String>,
    pub consultation_mode: ConsultationMode,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn with_name_query(mut self, query: &str) -> Self {
        self.name_query = query.to_string();
        self
    }

    pub fn with_specialties(mut self, labels: &[&str]) -> Self {
        self.selected_specialties = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_mode(mut self, mode: ConsultationMode) -> Self {
        self.consultation_mode = mode;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort_key = sort;
        self
    }
}
