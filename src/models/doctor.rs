//! The doctor record as supplied by the feed.
//!
//! Every field is optional: the feed makes no guarantees, and an absent
//! field means "unknown", never zero/false. Filter semantics decide per
//! predicate whether unknown excludes a record (see `filter`); display
//! helpers render "not specified" placeholders instead.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: Option<String>,
    pub specialties: Option<Vec<String>>,
    /// Years of experience.
    pub experience: Option<f64>,
    /// Consultation fee in currency units.
    pub fees: Option<f64>,
    pub video_consultation: Option<bool>,
    pub in_clinic: Option<bool>,
}

impl DoctorRecord {
    /// Display name, with a placeholder when the feed omitted it.
    pub fn name_label(&self) -> &str {
        self.name.as_deref().unwrap_or("Name not available")
    }

    /// Comma-joined specialty summary for a result card.
    pub fn specialty_label(&self) -> String {
        match &self.specialties {
            Some(list) if !list.is_empty() => list.join(", "),
            _ => "Not specified".to_string(),
        }
    }

    pub fn experience_label(&self) -> String {
        match self.experience {
            Some(years) => format!("{} yrs exp.", years),
            None => "Experience not specified".to_string(),
        }
    }

    pub fn fee_label(&self) -> String {
        match self.fees {
            Some(fees) => format!("₹{}", fees),
            None => "Fee not specified".to_string(),
        }
    }
}

/// Sanitize a specialty label for use in an element/test id:
/// whitespace runs and `/` become single `-`.
pub fn specialty_slug(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut last_was_dash = false;
    for c in label.chars() {
        if c.is_whitespace() || c == '/' {
            if !last_was_dash {
                slug.push('-');
                last_was_dash = true;
            }
        } else {
            slug.push(c);
            last_was_dash = false;
        }
    }
    slug
}
