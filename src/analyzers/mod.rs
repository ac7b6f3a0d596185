//! Score analysis and grading.
//!
//! This module computes descriptive statistics over a record store, assigns
//! letter grades by a fixed ladder, counts the grade distribution, and splits
//! students into passed and failed lists.

pub mod grade;
pub mod partition;
pub mod types;
pub mod utility;
