//! Baseline diff engine
//!
//! Builds snapshots, classifies each path against the stored baseline and
//! derives the baseline to persist next.

pub mod diff;
pub mod report;
pub mod service;

pub use diff::{compare, VerifyOutcome};
pub use report::{Change, ChangeKind, Report, Summary};
pub use service::{CreateOutcome, IntegrityService};
