//! Factory functions producing backend JSON.
//!
//! Each function returns the body the backend would send for one entity with reasonable
//! defaults, tests override what they assert on.

use serde_json::{json, Value};

/// Spring page envelope around `content`
pub fn page(content: Vec<Value>, number: u32, size: u32, total_elements: u64) -> Value {
    let total_pages = if size == 0 {
        0
    } else {
        total_elements.div_ceil(size as u64)
    };

    json!({
        "content": content,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "number": number,
        "size": size,
        "first": number == 0,
        "last": total_pages == 0 || number as u64 + 1 >= total_pages,
    })
}

pub fn booking(id: i64, status: &str, payment_status: &str) -> Value {
    json!({
        "id": id,
        "bookingCode": format!("BK{:05}", id),
        "customerName": "Nguyễn Văn An",
        "identityCard": "001203004567",
        "phone": "0912345678",
        "email": "an.nguyen@example.vn",
        "tripCode": "SE1-20240501",
        "ticketCount": 2,
        "totalAmount": 1_250_000.0,
        "status": status,
        "paymentStatus": payment_status,
        "bookingDate": "2024-04-20T10:15:00",
    })
}

pub fn train(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "trainNumber": format!("SE{}", id),
        "name": format!("Thống Nhất SE{}", id),
        "trainType": "express",
        "capacity": 640,
        "status": status,
        "carriageCount": 10,
    })
}

pub fn station(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "code": format!("ST{:03}", id),
        "city": name,
        "address": null,
        "status": "active",
    })
}

pub fn seat(id: i64, carriage_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "carriageId": carriage_id,
        "seatNumber": format!("{}", id),
        "seatType": "soft_seat",
        "status": status,
        "price": 450_000.0,
    })
}

pub fn carriage(id: i64, train_id: i64, seats: Vec<Value>) -> Value {
    json!({
        "id": id,
        "trainId": train_id,
        "trainNumber": format!("SE{}", train_id),
        "carriageNumber": format!("{}", id),
        "carriageType": "soft_seat",
        "capacity": 64,
        "seats": seats,
    })
}

pub fn route_stop(station_id: i64, stop_order: i32) -> Value {
    json!({
        "stationId": station_id,
        "stationName": format!("Ga {}", station_id),
        "stopOrder": stop_order,
        "arrivalOffsetMinutes": (stop_order - 1) * 90,
        "departureOffsetMinutes": (stop_order - 1) * 90 + 5,
    })
}

pub fn route(id: i64, stops: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": "Hà Nội - Sài Gòn",
        "code": format!("R{:03}", id),
        "originStationId": 1,
        "destinationStationId": 2,
        "originStationName": "Hà Nội",
        "destinationStationName": "Sài Gòn",
        "distanceKm": 1726.0,
        "estimatedDurationMinutes": 1950,
        "stops": stops,
    })
}

pub fn trip(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "tripCode": format!("SE1-{:04}", id),
        "trainId": 1,
        "trainNumber": "SE1",
        "routeId": 1,
        "routeName": "Hà Nội - Sài Gòn",
        "departureTime": "2024-05-01T19:30:00",
        "arrivalTime": "2024-05-03T04:00:00",
        "status": status,
        "delayMinutes": 0,
        "basePrice": 950_000.0,
        "availableSeats": 212,
    })
}

pub fn ticket(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "ticketCode": format!("TK{:06}", id),
        "bookingCode": "BK00001",
        "passengerName": "Lê Thị Hoa",
        "identityCard": "001203004567",
        "tripCode": "SE1-0001",
        "carriageNumber": "3",
        "seatNumber": "12",
        "departureStation": "Hà Nội",
        "arrivalStation": "Đà Nẵng",
        "departureTime": "2024-05-01T19:30:00",
        "price": 620_000.0,
        "status": status,
    })
}

pub fn refund(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "ticketCode": format!("TK{:06}", id),
        "bookingCode": "BK00001",
        "customerName": "Phạm Minh Đức",
        "originalAmount": 800_000.0,
        "refundPercentage": 80.0,
        "refundAmount": 640_000.0,
        "reason": "Thay đổi lịch trình",
        "status": status,
        "requestedAt": "2024-04-28T09:00:00",
    })
}

pub fn user(id: i64, role: &str, status: &str) -> Value {
    json!({
        "id": id,
        "fullName": "Hoàng Văn Nam",
        "email": format!("user{}@example.vn", id),
        "phone": "0987654321",
        "roles": [role],
        "status": status,
        "createdAt": "2024-01-15T08:00:00",
    })
}

pub fn dashboard_overview() -> Value {
    json!({
        "totalRevenue": 2_450_000_000.0,
        "totalBookings": 5120,
        "totalTickets": 8790,
        "totalUsers": 2301,
        "activeTrips": 42,
        "pendingRefunds": 7,
        "revenueGrowth": 12.5,
    })
}
