use dioxus::prelude::*;

use crate::client::{
    components::AdminLayout,
    routes::{
        Bookings, Carriages, Dashboard, Login, NotFound, Refunds, Settings, Stations, Tickets,
        TrainRoutes, Trains, Trips, Users,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(AdminLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/trains")]
        Trains {},

        #[route("/carriages")]
        Carriages {},

        #[route("/stations")]
        Stations {},

        #[route("/routes")]
        TrainRoutes {},

        #[route("/trips")]
        Trips {},

        #[route("/bookings")]
        Bookings {},

        #[route("/tickets")]
        Tickets {},

        #[route("/refunds")]
        Refunds {},

        #[route("/users")]
        Users {},

        #[route("/settings")]
        Settings {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
