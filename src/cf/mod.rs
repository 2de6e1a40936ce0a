//! Cloud Foundry integration.
//!
//! Fetches the apps of a space through the `cf` CLI, decodes the v2 API
//! payload and walks its pagination links.

pub mod pages;
pub mod payload;
pub mod source;
pub mod target;

pub use pages::{PageWalk, walk_pages};
pub use payload::{DecodedPage, decode};
pub use source::{CfCurlSource, FileSource, RawPayload, RecordSource, apps_path};
pub use target::{SpaceTarget, resolve_space};
