//! Integration tests for request handling through the PageKit facade
//!
//! Covers the path a list endpoint takes: JSON request body, normalization with
//! configured defaults, statement building and cached page fetches.

use pagekit::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
}

const CONFIG: &str = r#"
[database]
host = "127.0.0.1"
port = 1
database = "pagekit"
username = "postgres"
password = "postgres"
min_connections = 0
max_connections = 1
connection_timeout_seconds = 1
idle_timeout_seconds = 60
max_lifetime_seconds = 0

[cache]
redis_url = "redis://127.0.0.1:6379"
key_prefix = "test:"
default_ttl_seconds = 60
connection_timeout_ms = 100

[pagination]
default_per_page = 10
max_per_page = 100
"#;

fn pagekit() -> PageKit {
    let config = AppConfig::from_toml_str(CONFIG).unwrap();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database.connection_string())
        .unwrap();
    PageKit::from_pool(pool, &config)
}

fn user_allow_list() -> FieldAllowList {
    FieldAllowList::new()
        .with_field("id", "id")
        .with_field("name", "name")
        .with_field("phone", "phone")
        .with_field("status", "status")
}

#[tokio::test]
async fn test_json_request_to_statement() {
    let request: PaginationRequest = serde_json::from_str(
        r#"{
            "page": 3,
            "per_page": 15,
            "fields": "name, id ,password",
            "sort": "-id,name:asc",
            "filters": [
                { "key": "status", "value": "1,2", "condition": "in" },
                { "key": "password", "value": "x", "condition": "eq" }
            ]
        }"#,
    )
    .unwrap();

    let kit = pagekit();
    let pagination = kit.normalize(&request);
    let query = kit.build("user", &pagination, &user_allow_list()).unwrap();

    assert_eq!(
        query.statement(),
        "SELECT name,id FROM user\n\
         WHERE status IN($1,$2)\n\
         ORDER BY id desc, name asc\n\
         LIMIT $3 offset $4"
    );
    assert_eq!(
        query.arguments(),
        &[
            QueryArgument::from("1"),
            QueryArgument::from("2"),
            QueryArgument::from(15),
            QueryArgument::from(30),
        ]
    );
}

#[tokio::test]
async fn test_empty_request_uses_defaults() {
    let request: PaginationRequest = serde_json::from_str("{}").unwrap();

    let kit = pagekit();
    let query = kit
        .build("user", &kit.normalize(&request), &user_allow_list())
        .unwrap();

    assert_eq!(
        query.statement(),
        "SELECT id,name,phone,status FROM user\nLIMIT $1 offset $2"
    );
    assert_eq!(
        query.arguments(),
        &[QueryArgument::from(10), QueryArgument::from(0)]
    );
}

#[tokio::test]
async fn test_injection_attempts_never_reach_sql_text() {
    let request: PaginationRequest = serde_json::from_str(
        r#"{
            "fields": "id,name; DROP TABLE user",
            "sort": "-id;--",
            "filters": [
                { "key": "name", "value": "x' OR '1'='1", "condition": "eq" },
                { "key": "1=1 OR name", "value": "a", "condition": "like" }
            ]
        }"#,
    )
    .unwrap();

    let kit = pagekit();
    let query = kit
        .build("user", &kit.normalize(&request), &user_allow_list())
        .unwrap();

    assert_eq!(
        query.statement(),
        "SELECT id FROM user\nWHERE name = $1\nLIMIT $2 offset $3"
    );
    assert_eq!(query.arguments()[0], QueryArgument::from("x' OR '1'='1"));
}

#[tokio::test]
async fn test_fetch_page_prefers_cache() {
    let driver = Arc::new(MemoryDriver::new("test:"));
    let kit = pagekit().with_cache(driver.clone());
    let pagination = Pagination::new(1, 2).with_fields(["id", "name"]);

    let query = kit.build("user", &pagination, &user_allow_list()).unwrap();
    let rows = vec![
        UserRow {
            id: 1,
            name: "amir".to_string(),
        },
        UserRow {
            id: 2,
            name: "admin".to_string(),
        },
    ];
    TypedCache::<Vec<UserRow>>::new(driver.clone(), "page", Duration::from_secs(60))
        .set(&PageKit::page_cache_key("user", &query), &rows)
        .await
        .unwrap();

    let fetched: Vec<UserRow> = kit
        .fetch_page("user", &pagination, &user_allow_list())
        .await
        .unwrap();
    assert_eq!(fetched, rows);
}

#[tokio::test]
async fn test_fetch_page_rejects_bad_input_before_io() {
    let kit = pagekit().with_cache(Arc::new(MemoryDriver::new("")));

    let result: Result<Vec<UserRow>, _> = kit
        .fetch_page("  ", &Pagination::new(1, 10), &user_allow_list())
        .await;
    assert!(matches!(
        result,
        Err(PageKitError::Query(QueryBuildError::EmptyTable))
    ));

    let result: Result<Vec<UserRow>, _> = kit
        .fetch_page("user", &Pagination::new(1, 0), &user_allow_list())
        .await;
    assert!(matches!(
        result,
        Err(PageKitError::Query(QueryBuildError::InvalidPerPage(0)))
    ));
}
