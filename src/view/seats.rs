use crate::model::carriage::{Carriage, Seat, SeatStatus};

/// Seat counts of a carriage (or a whole train) by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatSummary {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
    pub reserved: usize,
    pub maintenance: usize,
    /// Seats with a status this console does not know
    pub other: usize,
}

impl SeatSummary {
    pub fn from_seats<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Self {
        seats.into_iter().fold(Self::default(), |mut summary, seat| {
            summary.total += 1;
            match seat.status {
                SeatStatus::Available => summary.available += 1,
                SeatStatus::Booked => summary.booked += 1,
                SeatStatus::Reserved => summary.reserved += 1,
                SeatStatus::Maintenance => summary.maintenance += 1,
                SeatStatus::Other(_) => summary.other += 1,
            }
            summary
        })
    }

    pub fn from_carriages<'a>(carriages: impl IntoIterator<Item = &'a Carriage>) -> Self {
        Self::from_seats(carriages.into_iter().flat_map(|c| c.seats.iter()))
    }

    /// Share of seats that are taken, 0.0 for an empty carriage
    pub fn occupancy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        (self.booked + self.reserved) as f64 / self.total as f64
    }
}

/// Difference between a carriage's declared capacity and the seats it actually has
pub fn capacity_gap(carriage: &Carriage) -> i64 {
    carriage.capacity as i64 - carriage.seats.len() as i64
}
