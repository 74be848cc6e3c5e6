//! Integration tests for fixity

mod cli_routing;
mod detection;
mod error_isolation;
mod hasher_verification;
mod test_utils;
