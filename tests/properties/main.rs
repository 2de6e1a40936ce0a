//! Property tests for the staleness filter.

mod filter_properties;
