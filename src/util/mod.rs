// LogTriage - util/mod.rs
//
// Utility modules: named constants, logging setup.
// No dependencies on core or api layers.

pub mod constants;
pub mod logging;
