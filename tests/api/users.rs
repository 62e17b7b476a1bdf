use railway_admin::{
    api::{
        users::{SortDirection, UserFilter},
        UserApi,
    },
    error::Error,
    model::user::{Role, UserStatus},
};
use railway_admin_test_utils::prelude::*;

use crate::util::test_client;

#[tokio::test]
/// Expect `page`, `pageSize` and the search term in the query
async fn lists_users_with_search() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/users",
            &[("page", "0"), ("pageSize", "10"), ("searchTerm", "nam")],
            factory::page(vec![factory::user(1, "ROLE_ADMIN", "active")], 0, 10, 1),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = UserFilter {
        search_term: "nam".to_string(),
        ..Default::default()
    };
    let page = UserApi::new(&client).list(&filter, 0, 10).await?;

    assert_eq!(page.content[0].roles, vec![Role::Admin]);
    assert!(page.content[0].is_admin());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect sorting to be sent only together with a sort column
async fn sends_sort_with_column() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/users",
            &[
                ("role", "customer"),
                ("status", "locked"),
                ("sortBy", "createdAt"),
                ("sortDirection", "desc"),
            ],
            factory::page(vec![factory::user(4, "customer", "banned")], 0, 10, 1),
            1,
        )
        .build()
        .await;
    let (client, _) = test_client(&test);

    let filter = UserFilter {
        search_term: String::new(),
        role: Some(Role::Customer),
        status: Some(UserStatus::Locked),
        sort_by: Some("createdAt".to_string()),
        sort_direction: SortDirection::Desc,
    };
    let page = UserApi::new(&client).list(&filter, 0, 10).await?;

    assert_eq!(page.content[0].status, UserStatus::Locked);
    test.assert_mocks();

    Ok(())
}
