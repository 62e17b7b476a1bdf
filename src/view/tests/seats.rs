//! Tests for SeatSummary.

use crate::{
    model::carriage::{Carriage, CarriageType, Seat, SeatStatus},
    view::seats::{capacity_gap, SeatSummary},
};

fn seat(id: i64, status: &str) -> Seat {
    Seat {
        id,
        carriage_id: Some(1),
        seat_number: format!("A{}", id),
        seat_type: None,
        status: SeatStatus::from(status),
        price: None,
    }
}

fn carriage(id: i64, capacity: i32, seats: Vec<Seat>) -> Carriage {
    Carriage {
        id,
        train_id: 1,
        train_number: Some("SE1".to_string()),
        carriage_number: id.to_string(),
        carriage_type: CarriageType::SoftSeat,
        capacity,
        seats,
    }
}

/// Tests counting seats by status.
///
/// Expected: one bucket per status, unknown statuses counted separately
#[test]
fn counts_seats_by_status() {
    let seats = vec![
        seat(1, "available"),
        seat(2, "AVAILABLE"),
        seat(3, "booked"),
        seat(4, "reserved"),
        seat(5, "maintenance"),
        seat(6, "broken"),
    ];

    let summary = SeatSummary::from_seats(&seats);

    assert_eq!(summary.total, 6);
    assert_eq!(summary.available, 2);
    assert_eq!(summary.booked, 1);
    assert_eq!(summary.reserved, 1);
    assert_eq!(summary.maintenance, 1);
    assert_eq!(summary.other, 1);
}

/// Tests counting across carriages.
///
/// Expected: totals over every carriage, occupancy 0.5
#[test]
fn counts_across_carriages() {
    let carriages = vec![
        carriage(1, 2, vec![seat(1, "booked"), seat(2, "available")]),
        carriage(2, 2, vec![seat(3, "reserved"), seat(4, "available")]),
    ];

    let summary = SeatSummary::from_carriages(&carriages);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.available, 2);
    assert_eq!(summary.occupancy(), 0.5);
}

/// Tests occupancy of an empty carriage.
///
/// Expected: 0.0
#[test]
fn empty_carriage_has_zero_occupancy() {
    assert_eq!(SeatSummary::default().occupancy(), 0.0);
}

/// Tests the gap between declared capacity and real seats.
///
/// Expected: 62 seats missing
#[test]
fn reports_capacity_gap() {
    let carriage = carriage(1, 64, vec![seat(1, "available"), seat(2, "available")]);
    assert_eq!(capacity_gap(&carriage), 62);
}
