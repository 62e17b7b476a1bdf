use crate::model::Page;

/// Page sizes offered by the list pages
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Number of page buttons shown around the current page
const PAGE_WINDOW: u32 = 5;

/// State of a pagination control, derived from the last page received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    /// Zero-based index of the current page
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl Pagination {
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            page: page.number,
            size: page.size,
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }

    /// Whether the "previous" and "first" controls are enabled
    pub fn can_previous(&self) -> bool {
        self.page > 0
    }

    /// Whether the "next" and "last" controls are enabled
    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn last_page(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }

    /// Line shown under a table, e.g. `Trang 1 / 3 (25 đơn đặt vé)`
    ///
    /// An empty result still reads as page 1 of 1.
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Trang {} / {} ({} {})",
            self.page + 1,
            self.total_pages.max(1),
            self.total_elements,
            noun
        )
    }

    /// Zero-based page indices to render as numbered buttons
    ///
    /// At most five pages, centred on the current page and shifted to stay inside bounds.
    pub fn visible_pages(&self) -> Vec<u32> {
        if self.total_pages == 0 {
            return Vec::new();
        }

        let window = PAGE_WINDOW.min(self.total_pages);
        let half = window / 2;
        let start = self
            .page
            .saturating_sub(half)
            .min(self.total_pages - window);

        (start..start + window).collect()
    }
}
