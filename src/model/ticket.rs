use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum TicketStatus {
        Booked => "booked" | "active" | "valid",
        Used => "used" | "checked_in",
        Cancelled => "cancelled" | "canceled",
        Refunded => "refunded",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub ticket_code: String,
    #[serde(default)]
    pub booking_code: Option<String>,
    pub passenger_name: String,
    #[serde(default)]
    pub identity_card: Option<String>,
    #[serde(default)]
    pub trip_code: Option<String>,
    #[serde(default)]
    pub carriage_number: Option<String>,
    #[serde(default)]
    pub seat_number: Option<String>,
    #[serde(default)]
    pub departure_station: Option<String>,
    #[serde(default)]
    pub arrival_station: Option<String>,
    #[serde(default)]
    pub departure_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub price: f64,
    pub status: TicketStatus,
}
