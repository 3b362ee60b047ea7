pub mod queries;
pub mod repo;

use crate::AppState;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use queries::Endpoint;
use serde::Serialize;
use serde_json::Value;

// body for every client-visible failure (404 fallback, store errors)
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// one route per endpoint table entry, all served by the same handler
pub fn dashboard_router() -> Router<AppState> {
    let mut router = Router::new();
    for endpoint in queries::ENDPOINTS {
        router = router.route(
            endpoint.path,
            get(move |State(state): State<AppState>| run_endpoint(state, endpoint)),
        );
    }
    router
}

async fn run_endpoint(
    state: AppState,
    endpoint: &'static Endpoint,
) -> Result<Json<Vec<Value>>, (StatusCode, Json<ErrorBody>)> {
    match repo::fetch_rows(&state.pool, endpoint.sql).await {
        Ok(rows) => Ok(Json(rows)),

        Err(e) => {
            eprintln!("Query failed for {}: {}", endpoint.path, e);
            Err(store_error(&state, &e))
        }
    }
}

// every route answers store failures the same way: 503 plus a JSON body,
// with the driver message attached outside production
fn store_error(state: &AppState, e: &sqlx::Error) -> (StatusCode, Json<ErrorBody>) {
    let detail = state.config.show_error_detail.then(|| e.to_string());

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorBody {
            error: "store unavailable",
            detail,
        }),
    )
}
