//! Tests for the optimistic update helpers.

use crate::{
    model::{
        booking::{Booking, BookingStatus, PaymentStatus},
        station::{Station, StationStatus},
    },
    view::optimistic::{cancel_booking, remove_by_id, upsert_by_id, upsert_saved},
};

fn booking(id: i64) -> Booking {
    Booking {
        id,
        booking_code: format!("BK{:04}", id),
        customer_name: "Trần Thị B".to_string(),
        identity_card: None,
        phone: None,
        email: None,
        trip_code: None,
        ticket_count: Some(2),
        total_amount: 900_000.0,
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Paid,
        booking_date: None,
    }
}

fn station(id: i64, name: &str) -> Station {
    Station {
        id,
        name: name.to_string(),
        code: format!("S{}", id),
        city: None,
        address: None,
        status: StationStatus::Active,
    }
}

/// Tests cancelling a booking in local state.
///
/// Verifies that only the targeted booking changes and that both its status and its payment
/// status become cancelled.
///
/// Expected: booking 2 cancelled, others untouched
#[test]
fn cancel_booking_updates_both_statuses() {
    let mut bookings = vec![booking(1), booking(2), booking(3)];

    assert!(cancel_booking(&mut bookings, 2));

    assert_eq!(bookings[1].status, BookingStatus::Cancelled);
    assert_eq!(bookings[1].payment_status, PaymentStatus::Cancelled);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    assert_eq!(bookings[2].payment_status, PaymentStatus::Paid);
    assert_eq!(
        serde_json::to_value(&bookings[1]).unwrap()["paymentStatus"],
        "cancelled"
    );
}

/// Tests cancelling a booking that is not loaded.
///
/// Expected: false, nothing changes
#[test]
fn cancel_missing_booking_is_noop() {
    let mut bookings = vec![booking(1)];
    assert!(!cancel_booking(&mut bookings, 9));
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
}

/// Tests replacing an updated entity in place.
///
/// Expected: same length, new name at the same position
#[test]
fn upsert_replaces_existing_item() {
    let mut stations = vec![station(1, "Hà Nội"), station(2, "Vinh")];
    upsert_by_id(&mut stations, station(2, "Ga Vinh"));

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[1].name, "Ga Vinh");
}

/// Tests appending a created entity.
///
/// Expected: new item at the end
#[test]
fn upsert_appends_new_item() {
    let mut stations = vec![station(1, "Hà Nội")];
    upsert_by_id(&mut stations, station(3, "Huế"));

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[1].id, 3);
}

/// Tests removing a deleted entity.
///
/// Expected: true once, false for an unknown id
#[test]
fn remove_deletes_matching_item() {
    let mut stations = vec![station(1, "Hà Nội"), station(2, "Vinh")];

    assert!(remove_by_id(&mut stations, 1));
    assert!(!remove_by_id(&mut stations, 1));
    assert_eq!(stations.len(), 1);
}

/// Tests applying a mutation answered without a body.
///
/// Expected: false, the list is left for a refetch
#[test]
fn upsert_saved_reports_missing_entity() {
    let mut stations = vec![station(1, "Hà Nội")];

    assert!(!upsert_saved(&mut stations, None));
    assert_eq!(stations.len(), 1);

    assert!(upsert_saved(&mut stations, Some(station(1, "Ga Hà Nội"))));
    assert_eq!(stations[0].name, "Ga Hà Nội");
}
