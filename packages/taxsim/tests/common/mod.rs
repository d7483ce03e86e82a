//! Common test utilities for taxsim
//!
//! Shared fixtures, assertions and builders for the integration and property tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use fixtures::*;
