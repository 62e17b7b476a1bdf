mod auth;
mod bookings;
mod carriages;
mod client;
mod dashboard;
mod refunds;
mod routes;
mod stations;
mod tickets;
mod trains;
mod trips;
mod users;
