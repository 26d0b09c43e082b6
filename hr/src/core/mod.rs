//! Deterministic, pure transforms over staff records.
//!
//! Core modules must be free of I/O side effects. They borrow their input and
//! return new owned containers, so callers keep their original data intact.

pub mod agents;
pub mod name_tags;
pub mod poll;
pub mod smarter_agents;
pub mod types;
