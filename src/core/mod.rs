// LogTriage - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, regex, serde.
// Must NOT depend on: api, or any I/O or HTTP crate directly.

pub mod advice;
pub mod classifier;
pub mod model;
