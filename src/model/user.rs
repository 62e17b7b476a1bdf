use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum Role {
        Admin => "admin" | "role_admin",
        Staff => "staff" | "role_staff",
        Customer => "customer" | "user" | "role_user" | "role_customer",
    }
}

status_enum! {
    pub enum UserStatus {
        Active => "active",
        Inactive => "inactive",
        Locked => "locked" | "banned" | "blocked",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}
