//! Tests for Pagination.

use crate::{model::Page, view::pagination::Pagination};

fn page(number: u32, total_pages: u32, total_elements: u64) -> Page<u32> {
    Page {
        content: Vec::new(),
        total_elements,
        total_pages,
        number,
        size: 10,
    }
}

/// Tests the booking list summary line.
///
/// Verifies the example from the bookings page: first page of three with 25 bookings.
///
/// Expected: "Trang 1 / 3 (25 đơn đặt vé)"
#[test]
fn renders_booking_summary() {
    let pagination = Pagination::from_page(&page(0, 3, 25));
    assert_eq!(pagination.summary("đơn đặt vé"), "Trang 1 / 3 (25 đơn đặt vé)");
}

/// Tests the summary of an empty result.
///
/// Expected: "Trang 1 / 1 (0 chuyến tàu)"
#[test]
fn empty_result_reads_as_single_page() {
    let pagination = Pagination::from_page(&page(0, 0, 0));
    assert_eq!(pagination.summary("chuyến tàu"), "Trang 1 / 1 (0 chuyến tàu)");
}

/// Tests that controls are disabled at the first page.
///
/// Expected: previous disabled, next enabled
#[test]
fn disables_previous_on_first_page() {
    let pagination = Pagination::from_page(&page(0, 3, 25));
    assert!(!pagination.can_previous());
    assert!(pagination.can_next());
}

/// Tests that controls are disabled at the last page.
///
/// Expected: previous enabled, next disabled
#[test]
fn disables_next_on_last_page() {
    let pagination = Pagination::from_page(&page(2, 3, 25));
    assert!(pagination.can_previous());
    assert!(!pagination.can_next());
    assert_eq!(pagination.last_page(), 2);
}

/// Tests boundaries for every page of a result.
///
/// Verifies that for totalPages = N exactly the first page disables "previous" and exactly
/// the last page disables "next".
///
/// Expected: boundaries only at 0 and N - 1
#[test]
fn boundaries_hold_for_every_page() {
    let total_pages = 7;
    for number in 0..total_pages {
        let pagination = Pagination::from_page(&page(number, total_pages, 70));
        assert_eq!(pagination.can_previous(), number != 0);
        assert_eq!(pagination.can_next(), number != total_pages - 1);
    }
}

/// Tests that a single page disables both directions.
///
/// Expected: both disabled
#[test]
fn single_page_disables_both() {
    let pagination = Pagination::from_page(&page(0, 1, 4));
    assert!(!pagination.can_previous());
    assert!(!pagination.can_next());
}

/// Tests the numbered page window in the middle of a long result.
///
/// Expected: [3, 4, 5, 6, 7] around page 5
#[test]
fn centres_window_on_current_page() {
    let pagination = Pagination::from_page(&page(5, 20, 200));
    assert_eq!(pagination.visible_pages(), vec![3, 4, 5, 6, 7]);
}

/// Tests the numbered page window near the end.
///
/// Expected: window shifted to stay inside bounds
#[test]
fn shifts_window_at_the_end() {
    let pagination = Pagination::from_page(&page(19, 20, 200));
    assert_eq!(pagination.visible_pages(), vec![15, 16, 17, 18, 19]);
}

/// Tests the numbered page window with fewer pages than the window.
///
/// Expected: every page
#[test]
fn short_results_show_every_page() {
    let pagination = Pagination::from_page(&page(1, 3, 25));
    assert_eq!(pagination.visible_pages(), vec![0, 1, 2]);
    assert!(Pagination::from_page(&page(0, 0, 0)).visible_pages().is_empty());
}
