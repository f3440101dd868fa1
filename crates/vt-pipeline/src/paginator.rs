//! Fixed-size page window over an owned sequence.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Snapshot of a paginator's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// 1-based current page.
    pub page: usize,
    pub page_size: usize,
    /// `ceil(len / page_size)`; zero for an empty sequence.
    pub total_pages: usize,
}

/// Stateful pagination over `data`.
///
/// Navigation clamps instead of failing, and replacing the data always
/// returns to page 1 so a page index from the previous sequence can never
/// address the new one.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    data: Vec<T>,
    page_size: NonZeroUsize,
    page: usize,
}

impl<T> Paginator<T> {
    #[must_use]
    pub const fn new(data: Vec<T>, page_size: NonZeroUsize) -> Self {
        Self {
            data,
            page_size,
            page: 1,
        }
    }

    /// Items on the current page: at most `page_size`, possibly none.
    #[must_use]
    pub fn current_slice(&self) -> &[T] {
        let begin = (self.page - 1)
            .saturating_mul(self.page_size.get())
            .min(self.data.len());
        let end = begin.saturating_add(self.page_size.get()).min(self.data.len());
        &self.data[begin..end]
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size.get()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.data.len().div_ceil(self.page_size.get())
    }

    /// Highest reachable page; page 1 exists even when the data is empty.
    #[must_use]
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        PageWindow {
            page: self.page,
            page_size: self.page_size.get(),
            total_pages: self.total_pages(),
        }
    }

    /// Go to page `n`, clamped into `[1, last_page]`.
    pub fn jump(&mut self, n: i64) {
        let last = self.last_page();
        self.page = if n < 1 {
            1
        } else {
            usize::try_from(n).map_or(last, |n| n.min(last))
        };
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.last_page());
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Replace the underlying sequence and return to page 1.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.page = 1;
    }
}
