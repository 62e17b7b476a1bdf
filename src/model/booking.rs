use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum BookingStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled" | "canceled",
        Completed => "completed",
    }
}

status_enum! {
    pub enum PaymentStatus {
        Pending => "pending" | "unpaid",
        Paid => "paid" | "completed",
        Refunded => "refunded",
        Cancelled => "cancelled" | "canceled",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub booking_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub identity_card: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub trip_code: Option<String>,
    #[serde(default)]
    pub ticket_count: Option<i32>,
    #[serde(default)]
    pub total_amount: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub booking_date: Option<NaiveDateTime>,
}

impl Booking {
    /// The backend only accepts cancellation of bookings that are not yet closed
    pub fn is_cancellable(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}
