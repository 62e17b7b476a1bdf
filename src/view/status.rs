//! Badge labels for every backend status.
//!
//! The mapping is total over the known values of each status enum, values the console does not
//! know are shown as their raw string with a neutral badge. Labels depend on context: a pending
//! refund waits for approval ("Chờ duyệt") while a pending booking waits for processing
//! ("Chờ xử lý").

use crate::model::{
    booking::{BookingStatus, PaymentStatus},
    carriage::{CarriageType, SeatStatus},
    refund::RefundStatus,
    station::StationStatus,
    ticket::TicketStatus,
    train::TrainStatus,
    trip::TripStatus,
    user::{Role, UserStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "badge-success",
            Self::Warning => "badge-warning",
            Self::Error => "badge-error",
            Self::Info => "badge-info",
            Self::Neutral => "badge-ghost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn new(label: &str, tone: BadgeTone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

pub trait StatusLabel {
    fn badge(&self) -> StatusBadge;

    fn label(&self) -> String {
        self.badge().label
    }
}

macro_rules! badges {
    ($ty:ty { $($variant:ident => ($label:literal, $tone:ident)),+ $(,)? }) => {
        impl StatusLabel for $ty {
            fn badge(&self) -> StatusBadge {
                match self {
                    $(Self::$variant => StatusBadge::new($label, BadgeTone::$tone),)+
                    Self::Other(raw) => StatusBadge::new(raw, BadgeTone::Neutral),
                }
            }
        }
    };
}

badges!(TripStatus {
    Scheduled => ("Đã lên lịch", Info),
    Delayed => ("Bị trễ", Warning),
    Cancelled => ("Đã hủy", Error),
    Completed => ("Hoàn thành", Success),
});

badges!(BookingStatus {
    Pending => ("Chờ xử lý", Warning),
    Confirmed => ("Đã xác nhận", Success),
    Cancelled => ("Đã hủy", Error),
    Completed => ("Hoàn thành", Info),
});

badges!(PaymentStatus {
    Pending => ("Chờ thanh toán", Warning),
    Paid => ("Đã thanh toán", Success),
    Refunded => ("Đã hoàn tiền", Info),
    Cancelled => ("Đã hủy", Error),
    Failed => ("Thất bại", Error),
});

badges!(RefundStatus {
    Pending => ("Chờ duyệt", Warning),
    Approved => ("Đã duyệt", Success),
    Rejected => ("Từ chối", Error),
});

badges!(TicketStatus {
    Booked => ("Đã đặt", Info),
    Used => ("Đã sử dụng", Success),
    Cancelled => ("Đã hủy", Error),
    Refunded => ("Đã hoàn tiền", Neutral),
});

badges!(TrainStatus {
    Active => ("Hoạt động", Success),
    Maintenance => ("Bảo trì", Warning),
    Inactive => ("Ngừng hoạt động", Neutral),
});

badges!(StationStatus {
    Active => ("Hoạt động", Success),
    Inactive => ("Ngừng hoạt động", Neutral),
    Maintenance => ("Bảo trì", Warning),
});

badges!(SeatStatus {
    Available => ("Còn trống", Success),
    Booked => ("Đã đặt", Error),
    Reserved => ("Đang giữ", Warning),
    Maintenance => ("Bảo trì", Neutral),
});

badges!(UserStatus {
    Active => ("Hoạt động", Success),
    Inactive => ("Không hoạt động", Neutral),
    Locked => ("Bị khóa", Error),
});

badges!(Role {
    Admin => ("Quản trị viên", Error),
    Staff => ("Nhân viên", Info),
    Customer => ("Khách hàng", Neutral),
});

badges!(CarriageType {
    HardSeat => ("Ghế cứng", Neutral),
    SoftSeat => ("Ghế mềm", Info),
    HardSleeper => ("Giường cứng", Neutral),
    SoftSleeper => ("Giường mềm", Info),
    Vip => ("VIP", Warning),
});
