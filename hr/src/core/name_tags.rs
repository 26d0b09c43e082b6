//! Name tag rendering.

use tracing::debug;

use crate::core::types::PersonNameRecord;

/// Render one tag per record, in input order.
///
/// Each tag reads `"{title} {forename} {surname}, {company}"`; `age` is ignored.
pub fn make_name_tags(people: &[PersonNameRecord]) -> Vec<String> {
    let tags: Vec<String> = people.iter().map(PersonNameRecord::name_tag).collect();
    debug!(count = tags.len(), "make_name_tags");
    tags
}
