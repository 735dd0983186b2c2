//! Mocks-list query and fetch bookkeeping.
//!
//! DESIGN
//! ======
//! The list is refetched on every query change and never merged client-side.
//! The previous page stays in `page` while a refetch is in flight, and a
//! request sequence number drops responses from superseded queries.

#[cfg(test)]
#[path = "mocks_test.rs"]
mod mocks_test;

use crate::net::types::{Mock, Page};

/// Page sizes offered by the list.
pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

/// Filter and paging inputs for `GET /api/mocks`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MocksQuery {
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    /// Free-text filter.
    pub q: String,
}

impl Default for MocksQuery {
    fn default() -> Self {
        Self { page: 0, size: PAGE_SIZES[0], q: String::new() }
    }
}

impl MocksQuery {
    /// Query-string pairs in request order.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [("page", self.page.to_string()), ("size", self.size.to_string()), ("q", self.q.clone())]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// A short page means the backend has nothing further.
    pub fn has_next(&self, returned: usize) -> bool {
        usize::try_from(self.size).map_or(false, |size| returned >= size)
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// New filter text; returns to the first page.
    pub fn set_search(&mut self, q: String) {
        if self.q != q {
            self.q = q;
            self.page = 0;
        }
    }

    /// New page size; unknown sizes are ignored. Returns to the first page.
    pub fn set_size(&mut self, size: u32) {
        if PAGE_SIZES.contains(&size) && self.size != size {
            self.size = size;
            self.page = 0;
        }
    }

    /// 1-based page label.
    pub fn page_label(&self) -> String {
        format!("Page {}", u64::from(self.page) + 1)
    }
}

/// Fetched list state for the mocks page.
#[derive(Clone, Debug, Default)]
pub struct MocksState {
    /// Last page received; kept while a newer request is in flight.
    pub page: Option<Page<Mock>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Outcome of the last import, shown under the toolbar.
    pub notice: Option<String>,
    request_seq: u64,
}

impl MocksState {
    /// Mark a new request in flight and return its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Apply a response. Returns `false` when `seq` was superseded and the
    /// result was dropped.
    pub fn finish_request(&mut self, seq: u64, result: Result<Page<Mock>, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        true
    }

    /// Rows of the current page.
    pub fn rows(&self) -> Vec<Mock> {
        self.page.as_ref().map(|p| p.content.clone()).unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.page.as_ref().map_or(0, |p| p.content.len())
    }
}

/// One-line summary of an import response, e.g. `"Imported 3 mocks, 1 failed"`.
pub fn import_summary(result: &serde_json::Value) -> String {
    let count = |key: &str| result.get(key).and_then(serde_json::Value::as_u64);
    match (count("successCount"), count("errorCount")) {
        (Some(ok), Some(failed)) if failed > 0 => format!("Imported {ok} mocks, {failed} failed"),
        (Some(ok), _) => format!("Imported {ok} mocks"),
        _ => "Import complete".to_owned(),
    }
}
