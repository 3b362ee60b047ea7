
use crate::AppState;
use crate::config::SupermartConfig;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_config() -> SupermartConfig {
    SupermartConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        bind_addr: "127.0.0.1:0".into(),
        show_error_detail: true,
    }
}

// in-memory store: a single connection, or every checkout sees a fresh db
pub async fn memory_pool() -> Pool<Sqlite> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

// fixture dataset: 9 order lines across 2018/2019, two countries, seven
// provinces, seven distinct subcategories with distinct quantity totals
// (no ties in the top-5 ordering)
const FIXTURE: &[(i32, u32, u32, &str, &str, &str, &str, &str, i64, f64, f64)] = &[
    (2019, 1, 5, "Alice", "中国", "广东", "办公用品", "纸张", 10, 100.0, 10.0),
    (2019, 2, 10, "Bob", "中国", "广东", "办公用品", "笔", 9, 90.0, 9.0),
    (2019, 3, 15, "Carol", "中国", "浙江", "技术", "电话", 8, 200.0, 20.0),
    (2019, 4, 20, "Dave", "中国", "江苏", "技术", "配件", 7, 70.0, 7.0),
    (2019, 5, 25, "Erin", "中国", "山东", "家具", "椅子", 6, 60.0, 6.0),
    (2019, 6, 30, "Frank", "中国", "四川", "家具", "桌子", 5, 50.0, 5.0),
    (2019, 7, 4, "Grace", "美国", "加州", "办公用品", "装订机", 4, 40.0, 4.0),
    (2018, 8, 8, "Heidi", "美国", "纽约", "技术", "电话", 3, 30.0, 3.0),
    (2018, 9, 12, "Alice", "中国", "广东", "家具", "椅子", 2, 20.0, 2.0),
];

pub async fn seed_fixture(pool: &Pool<Sqlite>) {
    for &(year, month, day, customer, country, province, category, subcategory, quantity, sales, profit) in
        FIXTURE
    {
        let order_date = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();

        sqlx::query(
            r#"
            INSERT INTO supermarket (
                OrderDate,
                CustomerName,
                Country_Region,
                State_Province,
                category,
                Subcategories,
                quantity,
                Sales,
                profit
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(order_date)
        .bind(customer)
        .bind(country)
        .bind(province)
        .bind(category)
        .bind(subcategory)
        .bind(quantity)
        .bind(sales)
        .bind(profit)
        .execute(pool)
        .await
        .unwrap();
    }
}

// helper to prepare the API against a migrated, seeded in-memory store
pub async fn setup_test_state() -> AppState {
    let pool = memory_pool().await;

    sqlx::migrate!().run(&pool).await.unwrap();
    seed_fixture(&pool).await;

    AppState {
        pool,
        config: Arc::new(test_config()),
    }
}

// simulate one GET request against the app and parse the JSON body
pub async fn get_json(app: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}
