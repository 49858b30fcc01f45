//! Form rendering

mod field_renderer;

pub use field_renderer::{draw_field, FieldDecor};
