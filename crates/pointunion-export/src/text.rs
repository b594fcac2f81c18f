//! Plain text serializer.
//!
//! One line per component. Each point is written as `[x, y]` followed by
//! a single space, and every line ends with `\n`:
//!
//! ```text
//! [0, 0] [1, 1] [2, 2]
//! [5, 5]
//! ```
//!
//! Line order and point order within a line carry no meaning; points
//! within a line follow registration order.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use std::fmt::Write;

use pointunion_core::Components;

/// Serialize components into the line-per-component text format.
///
/// # Examples
///
/// ```
/// use pointunion_core::{Point, UnionFind};
///
/// let mut uf = UnionFind::new();
/// uf.connect_points(Point::new(0, 0), Point::new(1, 1));
/// let text = pointunion_export::to_text(&uf.components());
/// assert_eq!(text, "[0, 0] [1, 1] \n");
/// ```
#[must_use]
pub fn to_text(components: &Components<'_>) -> String {
    let mut out = String::new();
    for group in components.point_groups() {
        for point in group {
            let _ = write!(out, "{point} ");
        }
        out.push('\n');
    }
    out
}
