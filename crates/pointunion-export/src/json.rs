//! JSON serializer.
//!
//! Emits the partition as an array of components, each an array of
//! `{"x": .., "y": ..}` objects in registration order.

use pointunion_core::{Components, Point};

/// Serialize components as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if serialization fails.
pub fn to_json(components: &Components<'_>) -> Result<String, serde_json::Error> {
    let groups: Vec<Vec<Point>> = components.point_groups().collect();
    serde_json::to_string_pretty(&groups)
}
