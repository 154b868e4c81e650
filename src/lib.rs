// LogTriage - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and programmatic use.
//
// The binary in `main.rs` wires these modules into the HTTP service.

pub mod api;
pub mod core;
pub mod util;
