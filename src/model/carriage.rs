use serde::{Deserialize, Serialize};

status_enum! {
    pub enum CarriageType {
        HardSeat => "hard_seat" | "seat",
        SoftSeat => "soft_seat",
        HardSleeper => "hard_sleeper" | "sleeper",
        SoftSleeper => "soft_sleeper",
        Vip => "vip",
    }
}

status_enum! {
    pub enum SeatStatus {
        Available => "available",
        Booked => "booked" | "occupied",
        Reserved => "reserved" | "held",
        Maintenance => "maintenance" | "unavailable",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: i64,
    #[serde(default)]
    pub carriage_id: Option<i64>,
    pub seat_number: String,
    #[serde(default)]
    pub seat_type: Option<String>,
    pub status: SeatStatus,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carriage {
    pub id: i64,
    pub train_id: i64,
    #[serde(default)]
    pub train_number: Option<String>,
    pub carriage_number: String,
    pub carriage_type: CarriageType,
    /// Declared capacity, may differ from `seats.len()` until seats are generated
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// Body of `POST /carriages` and `PUT /carriages/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarriagePayload {
    pub train_id: i64,
    pub carriage_number: String,
    pub carriage_type: CarriageType,
    pub capacity: i32,
}

/// Body of `POST /seats` and `PUT /seats/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPayload {
    pub carriage_id: i64,
    pub seat_number: String,
    pub seat_type: Option<String>,
    pub status: SeatStatus,
    pub price: Option<f64>,
}

impl From<&Carriage> for CarriagePayload {
    fn from(carriage: &Carriage) -> Self {
        Self {
            train_id: carriage.train_id,
            carriage_number: carriage.carriage_number.clone(),
            carriage_type: carriage.carriage_type.clone(),
            capacity: carriage.capacity,
        }
    }
}
