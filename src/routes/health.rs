// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Unauthenticated liveness endpoint for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" when the process can answer
    pub status: String,
    /// RFC 3339 server time
    pub timestamp: String,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route("/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_owned(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }
}
