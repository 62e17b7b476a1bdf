pub mod bookings;
pub mod carriages;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod refunds;
pub mod settings;
pub mod stations;
pub mod tickets;
pub mod train_routes;
pub mod trains;
pub mod trips;
pub mod users;

pub use bookings::Bookings;
pub use carriages::Carriages;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use refunds::Refunds;
pub use settings::Settings;
pub use stations::Stations;
pub use tickets::Tickets;
pub use train_routes::TrainRoutes;
pub use trains::Trains;
pub use trips::Trips;
pub use users::Users;
