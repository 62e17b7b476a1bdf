use super::pagination::DEFAULT_PAGE_SIZE;

/// Filter, page index and page size of a paginated list page
///
/// Every change that alters which rows match resets the page index to 0, so a narrower filter
/// never leaves the user on a page that no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F> {
    filter: F,
    page: u32,
    size: u32,
}

impl<F: Default> Default for ListState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> ListState<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 0;
    }

    /// Edits the filter in place, also resetting to the first page
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filter);
        self.page = 0;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.page = 0;
    }

    /// Moves to `page`, clamped to the last page when the total is known
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.page = if total_pages == 0 {
            0
        } else {
            page.min(total_pages - 1)
        };
    }
}
