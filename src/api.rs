// Stripe Analytics - REST API with Axum
// Five stateless GET endpoints; every data handler samples a fresh snapshot

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::generator::generate;

/// Liveness response
#[derive(Serialize)]
struct Health {
    status: &'static str,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /healthz - Liveness check
async fn healthz() -> impl IntoResponse {
    Json(Health { status: "ok" })
}

/// GET /api/dashboard - Complete dashboard data including MRR history,
/// customer metrics, and revenue breakdown
async fn get_dashboard() -> impl IntoResponse {
    Json(generate())
}

/// GET /api/mrr - Monthly Recurring Revenue history
async fn get_mrr_history() -> impl IntoResponse {
    Json(generate().mrr_history)
}

/// GET /api/customers - Customer metrics including total, new, churned
/// customers and churn rate
async fn get_customer_metrics() -> impl IntoResponse {
    Json(generate().customer_metrics)
}

/// GET /api/revenue - Revenue breakdown by subscription and one-time payments
async fn get_revenue_breakdown() -> impl IntoResponse {
    Json(generate().revenue_breakdown)
}

// ============================================================================
// Router
// ============================================================================

/// Build the full application router.
///
/// CORS is wide open for the dashboard front end: any origin (mirrored),
/// any method, any header, credentials allowed.
pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/mrr", get(get_mrr_history))
        .route("/customers", get(get_customer_metrics))
        .route("/revenue", get(get_revenue_breakdown));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(CorsLayer::very_permissive())
}
