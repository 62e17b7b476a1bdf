//! Tests for ListState.

use crate::{
    api::bookings::BookingFilter,
    model::booking::BookingStatus,
    view::{pagination::DEFAULT_PAGE_SIZE, query::ListState},
};

fn state_on_page(page: u32) -> ListState<BookingFilter> {
    let mut state = ListState::<BookingFilter>::default();
    state.set_page(page, 10);
    state
}

/// Tests that a new filter resets the page index.
///
/// Expected: page 0
#[test]
fn set_filter_resets_page() {
    let mut state = state_on_page(4);
    assert_eq!(state.page(), 4);

    state.set_filter(BookingFilter {
        booking_status: Some(BookingStatus::Confirmed),
        identity_card: String::new(),
    });

    assert_eq!(state.page(), 0);
    assert_eq!(
        state.filter().booking_status,
        Some(BookingStatus::Confirmed)
    );
}

/// Tests that editing the filter in place resets the page index.
///
/// Expected: page 0
#[test]
fn update_filter_resets_page() {
    let mut state = state_on_page(2);
    state.update_filter(|f| f.identity_card = "0123".to_string());

    assert_eq!(state.page(), 0);
    assert_eq!(state.filter().identity_card, "0123");
}

/// Tests that a new page size resets the page index.
///
/// Expected: page 0 with the new size
#[test]
fn set_size_resets_page() {
    let mut state = state_on_page(3);
    assert_eq!(state.size(), DEFAULT_PAGE_SIZE);

    state.set_size(50);

    assert_eq!(state.page(), 0);
    assert_eq!(state.size(), 50);
}

/// Tests clamping the page index to the known total.
///
/// Expected: last page index
#[test]
fn set_page_clamps_to_last_page() {
    let mut state = ListState::<BookingFilter>::default();
    state.set_page(9, 3);
    assert_eq!(state.page(), 2);

    state.set_page(5, 0);
    assert_eq!(state.page(), 0);
}

/// Tests that a zero page size is never stored.
///
/// Expected: size 1
#[test]
fn set_size_rejects_zero() {
    let mut state = ListState::<BookingFilter>::default();
    state.set_size(0);
    assert_eq!(state.size(), 1);
}
