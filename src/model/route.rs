use serde::{Deserialize, Serialize};

/// A station served by a route, `stop_order` starts at 1 for the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub station_id: i64,
    #[serde(default)]
    pub station_name: Option<String>,
    pub stop_order: i32,
    #[serde(default)]
    pub arrival_offset_minutes: Option<i32>,
    #[serde(default)]
    pub departure_offset_minutes: Option<i32>,
    #[serde(default)]
    pub distance_from_origin_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    pub origin_station_id: i64,
    pub destination_station_id: i64,
    #[serde(default)]
    pub origin_station_name: Option<String>,
    #[serde(default)]
    pub destination_station_name: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub estimated_duration_minutes: Option<i32>,
    /// Only filled by the `with-stations` endpoints
    #[serde(default, alias = "stations")]
    pub stops: Vec<RouteStop>,
}

impl Route {
    /// Stops sorted by their position on the route
    pub fn ordered_stops(&self) -> Vec<&RouteStop> {
        let mut stops: Vec<&RouteStop> = self.stops.iter().collect();
        stops.sort_by_key(|s| s.stop_order);
        stops
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    pub name: String,
    pub code: Option<String>,
    pub origin_station_id: i64,
    pub destination_station_id: i64,
    pub distance_km: Option<f64>,
    pub estimated_duration_minutes: Option<i32>,
    pub stops: Vec<RouteStop>,
}

impl From<&Route> for RoutePayload {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            code: route.code.clone(),
            origin_station_id: route.origin_station_id,
            destination_station_id: route.destination_station_id,
            distance_km: route.distance_km,
            estimated_duration_minutes: route.estimated_duration_minutes,
            stops: route.ordered_stops().into_iter().cloned().collect(),
        }
    }
}
