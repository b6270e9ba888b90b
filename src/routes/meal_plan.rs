// ABOUTME: Meal-plan route handler
// ABOUTME: Generates today's plan for the authenticated user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

/// Meal-plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal-plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/mealplan/generate", get(Self::handle_generate))
            .with_state(resources)
    }

    /// Handle GET /mealplan/generate
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let username = authenticate(&headers, &resources)?;
        let plan = resources
            .meal_plans
            .generate_for(&username, Utc::now().date_naive())
            .await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
