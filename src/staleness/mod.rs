//! Staleness filtering.
//!
//! Decides which applications in a space have not been updated since a
//! cutoff instant. Everything here is pure: no I/O, no shared state, and
//! the filter can be applied page by page with the outcomes concatenated.

pub mod cutoff;
pub mod exclusion;
pub mod filter;
pub mod record;

pub use cutoff::{Cutoff, resolve};
pub use exclusion::{ExclusionPattern, compile};
pub use filter::{FilterOutcome, FilterResult, MalformedRecord, StaleApp, StalenessFilter, filter};
pub use record::ApplicationRecord;
