use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum TripStatus {
        Scheduled => "scheduled",
        Delayed => "delayed",
        Cancelled => "cancelled" | "canceled",
        Completed => "completed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    #[serde(default)]
    pub trip_code: Option<String>,
    pub train_id: i64,
    #[serde(default)]
    pub train_number: Option<String>,
    pub route_id: i64,
    #[serde(default)]
    pub route_name: Option<String>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub status: TripStatus,
    #[serde(default)]
    pub delay_minutes: i32,
    #[serde(default)]
    pub delay_reason: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub available_seats: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPayload {
    pub train_id: i64,
    pub route_id: i64,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub base_price: Option<f64>,
    pub status: Option<TripStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripStatusRequest {
    pub status: TripStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDelayRequest {
    pub delay_minutes: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCancelRequest {
    pub reason: Option<String>,
}
