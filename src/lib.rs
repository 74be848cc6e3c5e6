//! fixity: file integrity baselines
//!
//! Fingerprints every file under a directory tree, stores the fingerprints as
//! a JSON baseline, and later reports which files were added, removed or
//! changed relative to that baseline.

pub mod baseline;
pub mod cli;
pub mod config;
pub mod error;
pub mod integrity;
pub mod logging;
pub mod scan;
pub mod types;
