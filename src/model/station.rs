use serde::{Deserialize, Serialize};

status_enum! {
    pub enum StationStatus {
        Active => "active",
        Inactive => "inactive" | "closed",
        Maintenance => "maintenance",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: StationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPayload {
    pub name: String,
    pub code: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub status: StationStatus,
}

impl From<&Station> for StationPayload {
    fn from(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            code: station.code.clone(),
            city: station.city.clone(),
            address: station.address.clone(),
            status: station.status.clone(),
        }
    }
}
