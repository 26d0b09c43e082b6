//! Test-only helpers for constructing records and loading fixtures.

use crate::core::types::{EmployeeRecord, PersonNameRecord, PersonProfileRecord};

const FRUIT_BOWL: &str = include_str!("../tests/fixtures/fruit_bowl.json");

/// Create an employee with the given profession.
pub fn employee(name: &str, profession: &str) -> EmployeeRecord {
    EmployeeRecord::new(name, profession)
}

/// Create a name record with explicit fields.
pub fn name_record(
    title: &str,
    forename: &str,
    surname: &str,
    age: u32,
    company: &str,
) -> PersonNameRecord {
    PersonNameRecord {
        title: title.to_string(),
        forename: forename.to_string(),
        surname: surname.to_string(),
        age,
        company: company.to_string(),
    }
}

/// Create a profile with explicit about-me text and interests.
pub fn profile(name: &str, age: u32, about_me: &str, interests: &[&str]) -> PersonProfileRecord {
    PersonProfileRecord {
        name: name.to_string(),
        age,
        about_me: about_me.to_string(),
        interests: interests.iter().map(|interest| interest.to_string()).collect(),
    }
}

/// Labels from the shared fruit bowl fixture (1001 entries).
pub fn fruit_bowl() -> Vec<String> {
    serde_json::from_str(FRUIT_BOWL).expect("fruit bowl fixture is a JSON string array")
}
