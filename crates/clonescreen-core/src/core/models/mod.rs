//! # Models Module
//!
//! Data structures representing the screening population and its derived
//! results: clone identity, intrinsic biological parameters, write-once
//! timepoint observations, and the Day-7 result projection used for ranking
//! and export.

pub mod clone;
pub mod results;
