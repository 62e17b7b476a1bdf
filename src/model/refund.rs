use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum RefundStatus {
        Pending => "pending" | "processing" | "requested",
        Approved => "approved" | "completed" | "refunded",
        Rejected => "rejected" | "denied" | "declined",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub id: i64,
    #[serde(default)]
    pub ticket_code: Option<String>,
    #[serde(default)]
    pub booking_code: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub original_amount: f64,
    /// Share of the original amount returned to the customer, 0 to 100
    #[serde(default)]
    pub refund_percentage: f64,
    #[serde(default)]
    pub refund_amount: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: RefundStatus,
    #[serde(default)]
    pub requested_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub processed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub admin_note: Option<String>,
}

impl RefundRequest {
    /// Amount shown in the table
    ///
    /// The backend computes the refund, when it has not been filled in yet the value is
    /// derived from the percentage for display only.
    pub fn display_amount(&self) -> f64 {
        self.refund_amount
            .unwrap_or(self.original_amount * self.refund_percentage / 100.0)
    }

    pub fn is_pending(&self) -> bool {
        self.status == RefundStatus::Pending
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundApproval {
    pub admin_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRejection {
    pub reason: String,
}
