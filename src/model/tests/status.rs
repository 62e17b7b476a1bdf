//! Tests for status enum parsing.

use crate::model::{
    booking::{Booking, BookingStatus, PaymentStatus},
    refund::RefundStatus,
    trip::TripStatus,
    user::Role,
};

/// Tests case-insensitive parsing of backend statuses.
///
/// Verifies that upper case values sent by the backend map onto the known variants.
///
/// Expected: Known variants
#[test]
fn parses_case_insensitively() {
    assert_eq!(TripStatus::from("SCHEDULED"), TripStatus::Scheduled);
    assert_eq!(TripStatus::from(" Delayed "), TripStatus::Delayed);
    assert_eq!(BookingStatus::from("CONFIRMED"), BookingStatus::Confirmed);
}

/// Tests mapping of refund status aliases.
///
/// Verifies that the derived aliases used by older backend versions collapse onto
/// the three canonical refund states.
///
/// Expected: pending/approved/rejected
#[test]
fn maps_refund_aliases() {
    assert_eq!(RefundStatus::from("processing"), RefundStatus::Pending);
    assert_eq!(RefundStatus::from("REFUNDED"), RefundStatus::Approved);
    assert_eq!(RefundStatus::from("completed"), RefundStatus::Approved);
    assert_eq!(RefundStatus::from("declined"), RefundStatus::Rejected);
}

/// Tests that unknown statuses survive a round trip.
///
/// Verifies that a value the console does not know is kept verbatim and serialized back
/// unchanged.
///
/// Expected: Other("ON_HOLD") serialized as "ON_HOLD"
#[test]
fn keeps_unknown_status_verbatim() {
    let status: TripStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();

    assert_eq!(status, TripStatus::Other("ON_HOLD".to_string()));
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"ON_HOLD\"");
}

/// Tests serializing known statuses.
///
/// Expected: canonical lower case wire value
#[test]
fn serializes_canonical_value() {
    let json = serde_json::to_string(&PaymentStatus::from("CANCELED")).unwrap();
    assert_eq!(json, "\"cancelled\"");
}

/// Tests parsing Spring security role names.
///
/// Expected: ROLE_ADMIN maps to Role::Admin
#[test]
fn parses_spring_role_names() {
    assert_eq!(Role::from("ROLE_ADMIN"), Role::Admin);
    assert_eq!(Role::from("ROLE_USER"), Role::Customer);
}

/// Tests deserializing a booking from backend JSON.
///
/// Verifies camelCase field names and the status enums inside a full DTO.
///
/// Expected: Booking with confirmed status and paid payment
#[test]
fn deserializes_booking() {
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "id": 7,
        "bookingCode": "BK0007",
        "customerName": "Nguyễn Văn A",
        "identityCard": "012345678901",
        "totalAmount": 450000.0,
        "status": "CONFIRMED",
        "paymentStatus": "PAID",
        "bookingDate": "2024-05-01T08:30:00"
    }))
    .unwrap();

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.payment_status, PaymentStatus::Paid);
    assert!(booking.is_cancellable());
}
