//! HTTP adapter
//!
//! Exposes the orchestrator as `POST /query` plus a `GET /health` probe.
//! The orchestrator itself never fails, so the only error responses are
//! request-shape problems (400) and genuinely unexpected rejections (500).

use std::convert::Infallible;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::agent::orchestrator::Orchestrator;
use crate::error::AgentResult;

#[derive(Debug, Deserialize)]
struct QueryRequest {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the route tree for the HTTP adapter.
pub fn routes(
    orchestrator: Arc<Orchestrator>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let query_route = warp::path("query")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_orchestrator(orchestrator))
        .and_then(handle_query_request);

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&HealthResponse { status: "ok" }));

    query_route.or(health_route).recover(handle_rejection)
}

fn with_orchestrator(
    orchestrator: Arc<Orchestrator>,
) -> impl Filter<Extract = (Arc<Orchestrator>,), Error = Infallible> + Clone {
    warp::any().map(move || orchestrator.clone())
}

async fn handle_query_request(
    request: QueryRequest,
    orchestrator: Arc<Orchestrator>,
) -> Result<impl Reply, Infallible> {
    if request.query.is_empty() {
        let body = ErrorResponse {
            error: "Query parameter is required".to_string(),
        };
        return Ok(warp::reply::with_status(
            warp::reply::json(&body),
            StatusCode::BAD_REQUEST,
        ));
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, query_len = request.query.len(), "handling query");

    let answer = orchestrator.handle_query(&request.query).await;

    Ok(warp::reply::with_status(
        warp::reply::json(&answer),
        StatusCode::OK,
    ))
}

/// Map rejections onto the JSON error contract: body-shape problems are 400,
/// unknown routes 404, everything else 500.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        error!("unhandled rejection: {err:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse { error: message }),
        status,
    ))
}

/// Serve the HTTP adapter until ctrl-c.
pub async fn serve(orchestrator: Arc<Orchestrator>, port: u16) -> AgentResult<()> {
    let (addr, server) = warp::serve(routes(orchestrator)).bind_with_graceful_shutdown(
        ([0, 0, 0, 0], port),
        async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        },
    );

    info!("listening on {addr}");
    server.await;

    Ok(())
}
