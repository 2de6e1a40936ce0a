//! janitor - find stale applications in a Cloud Foundry space.
//!
//! The interesting part lives in [`staleness`]; [`cf`] fetches and decodes
//! app listings and [`cli`] wires both to the command line.

pub mod app;
pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod staleness;
pub mod test_utils;

pub use error::{JanitorError, Result};
