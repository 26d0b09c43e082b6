//! Record transforms for screening and tallying staff data.
//!
//! The crate is split the same way throughout:
//!
//! - **[`core`]**: Pure, deterministic transforms over borrowed record slices.
//!   Every transform returns a freshly allocated container and never touches
//!   its input.
//! - **[`records`]** and **[`config`]**: Entry layers that turn JSON and TOML
//!   text into typed values, failing fast on malformed input.
//!
//! [`logging`] installs a development tracing subscriber for callers that want
//! to see the `debug`/`trace` events emitted by the transforms.

pub mod config;
pub mod core;
pub mod logging;
pub mod records;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::agents::{remove_agents, remove_agents_marked};
pub use crate::core::name_tags::make_name_tags;
pub use crate::core::poll::create_poll;
pub use crate::core::smarter_agents::{remove_smarter_agents, remove_smarter_agents_marked};
pub use crate::core::types::{EmployeeRecord, MARKER, PersonNameRecord, PersonProfileRecord, Poll};
