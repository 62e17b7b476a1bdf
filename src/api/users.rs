use crate::{
    api::{push_opt, ApiClient, Query},
    error::Error,
    model::{
        user::{Role, User, UserStatus},
        Page,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters of `GET /users`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFilter {
    pub search_term: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
}

pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    /// Creates a new instance of [`UserApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        filter: &UserFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page<User>, Error> {
        let mut query: Query = vec![("page", page.to_string()), ("pageSize", page_size.to_string())];
        push_opt(&mut query, "searchTerm", Some(filter.search_term.as_str()));
        push_opt(&mut query, "role", filter.role.as_ref().map(|r| r.as_str()));
        push_opt(&mut query, "status", filter.status.as_ref().map(|s| s.as_str()));
        if let Some(sort_by) = filter.sort_by.as_deref().filter(|s| !s.is_empty()) {
            query.push(("sortBy", sort_by.to_string()));
            query.push(("sortDirection", filter.sort_direction.as_str().to_string()));
        }

        self.client.get_page("/users", &query).await
    }

    pub async fn get(&self, id: i64) -> Result<User, Error> {
        self.client.get_json(&format!("/users/{}", id), &[]).await
    }
}
