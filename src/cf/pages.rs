//! Pagination driver.

use std::collections::HashSet;

use tracing::debug;

use super::payload::decode;
use super::source::{RecordSource, apps_path};
use crate::error::{JanitorError, Result};
use crate::staleness::ApplicationRecord;

/// Summary of a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWalk {
    pub pages: usize,
    pub records: usize,
    /// True if `max_pages` stopped the walk before the last page.
    pub truncated: bool,
}

/// Fetch and decode every page of apps in `space_guid`, handing each page's
/// records to `on_page` in order.
///
/// A `next_url` that was already fetched is a decode failure; the walk
/// would otherwise never end.
pub fn walk_pages<S, F>(
    source: &S,
    space_guid: &str,
    max_pages: usize,
    mut on_page: F,
) -> Result<PageWalk>
where
    S: RecordSource + ?Sized,
    F: FnMut(&[ApplicationRecord]),
{
    let mut walk = PageWalk::default();
    let mut seen = HashSet::new();
    seen.insert(apps_path(space_guid));

    let mut raw = source.fetch_raw(space_guid)?;
    loop {
        let page = decode(&raw)?;
        walk.pages += 1;
        walk.records += page.records.len();
        debug!(
            target: "janitor::cf",
            page = walk.pages,
            records = page.records.len(),
            total_pages = ?page.total_pages,
            "decoded page"
        );
        on_page(&page.records);

        let Some(next_url) = page.next_url else {
            break;
        };
        if !source.follows_pages() {
            debug!(target: "janitor::cf", next_url = %next_url, "source does not follow pages");
            break;
        }
        if walk.pages >= max_pages {
            walk.truncated = true;
            break;
        }
        if !seen.insert(next_url.clone()) {
            return Err(JanitorError::Decode(format!(
                "pagination loop: {next_url} was already fetched"
            )));
        }
        raw = source.fetch_next(&next_url)?;
    }

    Ok(walk)
}
