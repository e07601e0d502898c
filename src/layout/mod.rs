//! Layout primitives shared by every renderer.
//!
//! - [`Cursor`]: the caller-owned next drawing position
//! - [`CellOptions`] and friends: per-call styling with documented defaults
//! - [`wrap_text`]: greedy word wrap against a width measurement
//! - [`resolve_gap`]: horizontal offset of a line inside a box
//!
//! Nothing here draws. The functions are pure and take the width
//! measurement as a closure, so they work with any font backend.

mod align;
mod cursor;
mod options;
mod wrap;

pub use align::{align_offset, resolve_gap};
pub use cursor::Cursor;
pub use options::{Align, CellOptions, DataCell, FontStyle, HeaderSpec, TextInputField};
pub use wrap::wrap_text;
