//! View-model logic shared by the admin pages.
//!
//! Nothing here touches the DOM or the network, the Dioxus components only wire these
//! functions to signals.

pub mod fallback;
pub mod format;
pub mod generation;
pub mod optimistic;
pub mod pagination;
pub mod query;
pub mod seats;
pub mod status;

#[cfg(test)]
mod tests;

pub use generation::RequestGeneration;
pub use pagination::Pagination;
pub use query::ListState;
