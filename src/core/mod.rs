// ScanScope - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, roxmltree, chrono, regex, serde.
// Must NOT depend on: ui, platform, app, or any I/O directly.

pub mod export;
pub mod filter;
pub mod group;
pub mod model;
pub mod nmap;
