//! Integration tests for the widget binding surface.
//!
//! Fixtures live in [`schema`] so every test module exercises the same
//! macro-registered widgets against the shared global registry.

pub mod prelude;
pub mod schema;
pub mod test;
