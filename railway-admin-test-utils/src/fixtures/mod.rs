//! JSON fixtures shaped like the ticketing backend's responses.

pub mod factory;
