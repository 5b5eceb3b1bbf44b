//! Page lists and elided pagination summaries
//!
//! The window arithmetic is kept in plain functions over page numbers so the
//! boundary cases can be checked without building a list.

use super::list::PaginatedList;
use super::types::{Navigation, PageDescriptor};
use crate::source::ItemSource;
use std::ops::RangeInclusive;

/// Default number of context pages around the current page in a summary
pub const DEFAULT_SUMMARY_CONTEXT: usize = 4;

/// Page numbers to list, optionally capped to a window of `limit` pages
///
/// The window is centered on `current` and shifted back inside `1..=total`
/// so it keeps `limit` entries whenever there are that many pages. A limit of
/// `None` or `Some(0)` lists every page.
pub fn page_window(current: usize, total: usize, limit: Option<usize>) -> RangeInclusive<usize> {
    match limit {
        Some(limit) if limit > 0 && limit < total => {
            let mut start = current.saturating_sub((limit - 1) / 2).max(1);
            let end = start.saturating_add(limit - 1).min(total);
            if end + 1 < start.saturating_add(limit) {
                start = (end + 1 - limit).max(1);
            }
            start..=end
        }
        _ => 1..=total,
    }
}

/// Page numbers of an elided summary, `None` marking an ellipsis
///
/// Always starts with page 1 and ends with `total`, with `context` pages
/// around `current` in between.
pub fn summary_entries(current: usize, total: usize, context: usize) -> Vec<Option<usize>> {
    let mut entries = vec![Some(1)];
    if total <= 1 {
        return entries;
    }

    let low = current.saturating_sub(context / 2).max(2);
    let high = current.saturating_add(context.div_ceil(2)).min(total - 1);

    if low > 2 {
        entries.push(None);
    }
    entries.extend((low..=high).map(Some));
    if high < total - 1 {
        entries.push(None);
    }
    entries.push(Some(total));
    entries
}

impl<S: ItemSource> PaginatedList<S> {
    /// Descriptors for every page, or a centered window of `limit` pages
    ///
    /// With paging disabled this is a single current page 1.
    pub fn pages(&self, limit: Option<usize>) -> Vec<PageDescriptor> {
        if self.page_length_mode().is_disabled() {
            return vec![self.descriptor(1)];
        }
        page_window(self.current_page(), self.total_pages(), limit)
            .map(|num| self.descriptor(num))
            .collect()
    }

    /// First page, last page and `context` pages around the current one,
    /// with ellipsis markers for the gaps
    pub fn pagination_summary(&self, context: usize) -> Vec<PageDescriptor> {
        if self.page_length_mode().is_disabled() {
            return vec![self.descriptor(1)];
        }
        summary_entries(self.current_page(), self.total_pages(), context)
            .into_iter()
            .map(|entry| entry.map_or_else(PageDescriptor::ellipsis, |num| self.descriptor(num)))
            .collect()
    }

    /// Snapshot of every navigation value for rendering
    pub fn navigation(&self, pages_limit: Option<usize>, context: usize) -> Navigation {
        Navigation {
            page_start: self.page_start(),
            page_length: self.page_length(),
            total_items: self.total_items(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            first_item: self.first_item(),
            last_item: self.last_item(),
            more_than_one_page: self.more_than_one_page(),
            first_page: self.first_page(),
            last_page: self.last_page(),
            pages: self.pages(pages_limit),
            summary: self.pagination_summary(context),
            first_link: self.first_link(),
            last_link: self.last_link(),
            prev_link: self.prev_link(),
            next_link: self.next_link(),
        }
    }

    fn descriptor(&self, num: usize) -> PageDescriptor {
        PageDescriptor::page(num, num == self.current_page(), self.link_to_page(num))
    }
}
