// LogTriage - api/mod.rs
//
// HTTP boundary layer: routing, wire schema, request validation.
// Dependencies: core layer, util layer.
// The core never depends on this module.

pub mod error;
pub mod handlers;
pub mod router;
