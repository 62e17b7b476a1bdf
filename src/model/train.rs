use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum TrainStatus {
        Active => "active",
        Maintenance => "maintenance",
        Inactive => "inactive" | "retired",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub id: i64,
    pub train_number: String,
    pub name: String,
    #[serde(default)]
    pub train_type: Option<String>,
    /// Seat capacity declared for the train, the real seat count comes from its carriages
    #[serde(default)]
    pub capacity: i32,
    pub status: TrainStatus,
    #[serde(default)]
    pub carriage_count: Option<i32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `POST /trains` and `PUT /trains/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainPayload {
    pub train_number: String,
    pub name: String,
    pub train_type: Option<String>,
    pub capacity: i32,
    pub status: TrainStatus,
}

impl From<&Train> for TrainPayload {
    fn from(train: &Train) -> Self {
        Self {
            train_number: train.train_number.clone(),
            name: train.name.clone(),
            train_type: train.train_type.clone(),
            capacity: train.capacity,
            status: train.status.clone(),
        }
    }
}
