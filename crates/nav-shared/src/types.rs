//! Common types

use uuid::Uuid;

use crate::constants::GENERATED_ID_PREFIX;

/// Generates a fresh runtime identifier, e.g. `nav-3f2a...`.
pub fn new_id() -> String {
    format!("{}{}", GENERATED_ID_PREFIX, Uuid::new_v4().simple())
}
