//! Helpers shared by the pages.
//!
//! `select` maps `<select>` option values to `portal` filter types and back.

pub mod select;
