//! JSON entry points for record lists.
//!
//! Input text is parsed, checked against an embedded JSON Schema, and only
//! then deserialized. A missing field or wrong type is reported as a schema
//! violation before serde sees the value.

use anyhow::{Context, Result, anyhow};
use jsonschema::Draft;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::types::{EmployeeRecord, PersonNameRecord, PersonProfileRecord};

const EMPLOYEES_SCHEMA: &str = include_str!("../schemas/employees.schema.json");
const NAME_RECORDS_SCHEMA: &str = include_str!("../schemas/name_records.schema.json");
const PROFILES_SCHEMA: &str = include_str!("../schemas/profiles.schema.json");
const LABELS_SCHEMA: &str = include_str!("../schemas/labels.schema.json");

/// Parse a JSON array of `{ name, profession }` objects.
pub fn parse_employees(raw: &str) -> Result<Vec<EmployeeRecord>> {
    parse_validated("employees", raw, EMPLOYEES_SCHEMA)
}

/// Parse a JSON array of `{ title, forename, surname, age, company }` objects.
pub fn parse_name_records(raw: &str) -> Result<Vec<PersonNameRecord>> {
    parse_validated("name records", raw, NAME_RECORDS_SCHEMA)
}

/// Parse a JSON array of `{ name, age, aboutMe, interests }` objects.
pub fn parse_profiles(raw: &str) -> Result<Vec<PersonProfileRecord>> {
    parse_validated("profiles", raw, PROFILES_SCHEMA)
}

/// Parse a JSON array of label strings.
pub fn parse_labels(raw: &str) -> Result<Vec<String>> {
    parse_validated("labels", raw, LABELS_SCHEMA)
}

fn parse_validated<T: DeserializeOwned>(kind: &str, raw: &str, schema_raw: &str) -> Result<T> {
    let instance: Value =
        serde_json::from_str(raw).with_context(|| format!("parse {} json", kind))?;
    let schema: Value = serde_json::from_str(schema_raw)
        .with_context(|| format!("parse {} schema json", kind))?;
    validate_schema(kind, &instance, &schema)?;
    serde_json::from_value(instance).with_context(|| format!("deserialize {}", kind))
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(kind: &str, instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|err| anyhow!("invalid {} schema: {}", kind, err))?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "{} schema validation failed: {}",
            kind,
            messages.join("; ")
        ));
    }
    Ok(())
}
