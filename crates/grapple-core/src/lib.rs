//! Grapple Core
//!
//! Shared math, collections, logging and profiling used by the other
//! Grapple crates.

pub mod alloc;
pub mod logging;
pub mod math;
pub mod profiling;
