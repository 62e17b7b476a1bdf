//! DTOs exchanged with the ticketing backend.
//!
//! The backend owns the lifecycle of every entity here, the console only displays and mutates
//! them through the API. JSON field names are camelCase on the wire.

#[macro_use]
mod status;

pub mod api;
pub mod auth;
pub mod booking;
pub mod carriage;
pub mod dashboard;
pub mod page;
pub mod refund;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod trip;
pub mod user;

#[cfg(test)]
mod tests;

pub use page::Page;
