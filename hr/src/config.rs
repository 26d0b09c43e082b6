//! Filter configuration read from TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::agents::remove_agents_marked;
use crate::core::smarter_agents::remove_smarter_agents_marked;
use crate::core::types::{EmployeeRecord, MARKER, PersonProfileRecord, validate_marker};

/// Settings shared by the agent filters.
///
/// Missing fields fall back to the defaults, so an empty document is a valid
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    /// Value that flags an agent: exact profession, or substring of a profile.
    pub marker: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker: MARKER.to_string(),
        }
    }
}

impl FilterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: FilterConfig = toml::from_str(contents).context("parse filter config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        self.validate()?;
        let mut buf = toml::to_string_pretty(self).context("serialize filter config toml")?;
        buf.push('\n');
        Ok(buf)
    }

    pub fn validate(&self) -> Result<()> {
        validate_marker(&self.marker)
    }

    pub fn remove_agents(&self, employees: &[EmployeeRecord]) -> Result<Vec<EmployeeRecord>> {
        remove_agents_marked(employees, &self.marker)
    }

    pub fn remove_smarter_agents(
        &self,
        people: &[PersonProfileRecord],
    ) -> Result<Vec<PersonProfileRecord>> {
        remove_smarter_agents_marked(people, &self.marker)
    }
}
