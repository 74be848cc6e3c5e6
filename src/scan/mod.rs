//! Directory scanning
//!
//! Walks a directory tree and fingerprints the content of every regular file
//! it finds, producing a [`snapshot::Snapshot`].

pub mod hasher;
pub mod path;
pub mod snapshot;
pub mod walker;

pub use snapshot::{ScanFailure, ScanOptions, Snapshot};
