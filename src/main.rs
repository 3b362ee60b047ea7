use crate::config::SupermartConfig;
use crate::features::dashboard::{ErrorBody, dashboard_router};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Json, Router};
use dotenv;
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::Pool<Sqlite>,
    pub config: Arc<SupermartConfig>,
}

// full application router: dashboard endpoints, permissive CORS for the
// mini-program client, JSON 404 fallback, per-request logging
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(dashboard_router())
        .fallback(not_found)
        .layer(cors)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not found",
            detail: None,
        }),
    )
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    println!(
        "[{}] {} {} {} - {} ms",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = SupermartConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        println!(
            "Unable to connect to database at {}, creating...",
            config.database_url
        );
        match Sqlite::create_database(&config.database_url).await {
            Ok(_) => println!("Successfully created database at {}.", &config.database_url),
            Err(e) => panic!(
                "Unable to create database at {}. Error details: {}",
                &config.database_url, e
            ),
        };
    }

    // connect to our db
    let pool = match SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            panic!("Failed to create pool on {}: {}", config.database_url, e);
        }
    };

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    let app_state = AppState {
        pool,
        config: shared_config.clone(),
    };

    println!("Starting server...");

    let listener = tokio::net::TcpListener::bind(&shared_config.bind_addr).await?;
    println!("Server listening on http://{}", shared_config.bind_addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
