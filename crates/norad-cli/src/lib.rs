//! Norad CLI library.
//!
//! This crate provides output formatting for the Norad route planner
//! command-line interface.

pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
