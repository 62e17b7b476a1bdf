//! Local state updates applied after a successful mutation, so the table reflects the change
//! without refetching the page.

use crate::model::{
    booking::{Booking, BookingStatus, PaymentStatus},
    carriage::{Carriage, Seat},
    refund::RefundRequest,
    route::Route,
    station::Station,
    ticket::Ticket,
    train::Train,
    trip::Trip,
    user::User,
};

/// Entities that can be matched by their backend id
pub trait HasId {
    fn id(&self) -> i64;
}

macro_rules! impl_has_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl HasId for $ty {
                fn id(&self) -> i64 {
                    self.id
                }
            }
        )+
    };
}

impl_has_id!(Booking, Carriage, RefundRequest, Route, Seat, Station, Ticket, Train, Trip, User);

/// Replaces the item with the same id, or appends it when it is new
pub fn upsert_by_id<T: HasId>(items: &mut Vec<T>, item: T) {
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

/// Applies the entity returned by a create or update
///
/// Returns `false` when the backend acknowledged without a body, the caller then refetches the
/// list instead.
pub fn upsert_saved<T: HasId>(items: &mut Vec<T>, saved: Option<T>) -> bool {
    match saved {
        Some(item) => {
            upsert_by_id(items, item);
            true
        }
        None => false,
    }
}

/// Removes the item with `id`, returns whether anything was removed
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: i64) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Marks a booking as cancelled after `POST /bookings/cancel/{id}` succeeded
///
/// Both the booking status and its payment status become cancelled. Returns whether a booking
/// with that id was present.
pub fn cancel_booking(bookings: &mut [Booking], id: i64) -> bool {
    let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
        return false;
    };

    booking.status = BookingStatus::Cancelled;
    booking.payment_status = PaymentStatus::Cancelled;
    true
}
