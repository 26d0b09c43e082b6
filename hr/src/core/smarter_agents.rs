//! Profile screening by free-text and interest mentions.

use anyhow::Result;
use tracing::{debug, trace};

use crate::core::types::{MARKER, PersonProfileRecord, validate_marker};

/// Keep profiles that never mention [`MARKER`].
///
/// A profile is removed when the marker is a substring of `about_me` or of any
/// entry in `interests`, so `"guacamole"` counts as a mention. Survivors keep
/// their relative order.
pub fn remove_smarter_agents(people: &[PersonProfileRecord]) -> Vec<PersonProfileRecord> {
    filter_smarter_agents(people, MARKER)
}

/// Same as [`remove_smarter_agents`] with a caller-chosen marker.
///
/// Fails if `marker` is blank: an empty substring would match every profile.
pub fn remove_smarter_agents_marked(
    people: &[PersonProfileRecord],
    marker: &str,
) -> Result<Vec<PersonProfileRecord>> {
    validate_marker(marker)?;
    Ok(filter_smarter_agents(people, marker))
}

fn filter_smarter_agents(
    people: &[PersonProfileRecord],
    marker: &str,
) -> Vec<PersonProfileRecord> {
    let mut kept = Vec::with_capacity(people.len());
    for person in people {
        if person.mentions(marker) {
            trace!(name = %person.name, "removing agent by mention");
            continue;
        }
        kept.push(person.clone());
    }
    debug!(
        input = people.len(),
        kept = kept.len(),
        marker,
        "remove_smarter_agents"
    );
    kept
}
