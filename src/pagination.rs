use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Pagination over the filtered view
// ---------------------------------------------------------------------------

/// 1-indexed page cursor with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }

    /// Index range of the current page, clamped to `len`. Empty when the
    /// current page lies past the end.
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (self.current_page * self.page_size).min(len);
        start..end
    }

    /// The slice of `items` visible on the current page.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Jump to page `n`, clamped to `1..=max(1, total_pages)`.
    pub fn set_page(&mut self, n: i64, len: usize) {
        let last = self.total_pages(len).max(1) as i64;
        self.current_page = n.clamp(1, last) as usize;
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the cursor back inside range after the underlying list shrank.
    pub fn clamp_to(&mut self, len: usize) {
        self.set_page(self.current_page as i64, len);
    }
}
