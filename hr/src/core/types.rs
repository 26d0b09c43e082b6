//! Shared record types for the core transforms.
//!
//! Records are plain values: they have no identity beyond their fields and
//! the transforms never mutate them.

use std::fmt;

use anyhow::{Result, anyhow};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker value that flags an agent in every filter.
pub const MARKER: &str = "mole";

/// Label counts keyed in first-occurrence order.
///
/// Equality ignores key order, so two polls with the same counts compare equal.
pub type Poll = IndexMap<String, usize>;

/// Reject markers that are empty or whitespace only.
pub fn validate_marker(marker: &str) -> Result<()> {
    if marker.trim().is_empty() {
        return Err(anyhow!("marker must be a non-empty string"));
    }
    Ok(())
}

/// Employee entry screened by [`remove_agents`](crate::core::agents::remove_agents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub profession: String,
}

impl EmployeeRecord {
    pub fn new(name: impl Into<String>, profession: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profession: profession.into(),
        }
    }

    /// True if the profession is exactly `marker` (case-sensitive).
    pub fn has_profession(&self, marker: &str) -> bool {
        self.profession == marker
    }
}

/// Person entry rendered by [`make_name_tags`](crate::core::name_tags::make_name_tags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonNameRecord {
    pub title: String,
    pub forename: String,
    pub surname: String,
    /// Carried through deserialization; never part of the name tag.
    pub age: u32,
    pub company: String,
}

impl PersonNameRecord {
    /// Render `"{title} {forename} {surname}, {company}"`.
    pub fn name_tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PersonNameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}, {}",
            self.title, self.forename, self.surname, self.company
        )
    }
}

/// Free-text profile screened by
/// [`remove_smarter_agents`](crate::core::smarter_agents::remove_smarter_agents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonProfileRecord {
    pub name: String,
    pub age: u32,
    pub about_me: String,
    pub interests: Vec<String>,
}

impl PersonProfileRecord {
    /// True if `marker` appears as a substring of `about_me` or of any interest.
    pub fn mentions(&self, marker: &str) -> bool {
        self.about_me.contains(marker)
            || self
                .interests
                .iter()
                .any(|interest| interest.contains(marker))
    }
}
