//! Employee screening by exact profession.

use anyhow::Result;
use tracing::{debug, trace};

use crate::core::types::{EmployeeRecord, MARKER, validate_marker};

/// Keep employees whose profession is not exactly [`MARKER`].
///
/// Survivors keep their relative order. The result is a new vector even when
/// nothing is removed.
pub fn remove_agents(employees: &[EmployeeRecord]) -> Vec<EmployeeRecord> {
    filter_agents(employees, MARKER)
}

/// Same as [`remove_agents`] with a caller-chosen marker.
///
/// Fails if `marker` is blank.
pub fn remove_agents_marked(
    employees: &[EmployeeRecord],
    marker: &str,
) -> Result<Vec<EmployeeRecord>> {
    validate_marker(marker)?;
    Ok(filter_agents(employees, marker))
}

fn filter_agents(employees: &[EmployeeRecord], marker: &str) -> Vec<EmployeeRecord> {
    let kept: Vec<EmployeeRecord> = employees
        .iter()
        .filter(|employee| {
            let flagged = employee.has_profession(marker);
            if flagged {
                trace!(name = %employee.name, "removing agent by profession");
            }
            !flagged
        })
        .cloned()
        .collect();
    debug!(
        input = employees.len(),
        kept = kept.len(),
        marker,
        "remove_agents"
    );
    kept
}
