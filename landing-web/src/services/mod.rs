//! Browser bindings
//!
//! Thin wrappers over `web-sys` that turn DOM events into plain values for the
//! controllers in `shared`.

pub mod scroll;
pub mod viewport;
