// ABOUTME: Route module organization for the meal planner HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

//! Route module for the meal planner server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that authenticate, decode, and delegate to the service layer.

/// Registration, login, and logout routes
pub mod auth;
/// Health check route
pub mod health;
/// Meal-plan generation route
pub mod meal_plan;
/// Profile view and update routes
pub mod profile;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use meal_plan::MealPlanRoutes;
pub use profile::ProfileRoutes;

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use http::HeaderMap;

/// Turn a JSON extraction failure into a 400 with the decoder's message
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Resolve the bearer token on a request to a username
pub(crate) fn authenticate(headers: &HeaderMap, resources: &ServerResources) -> AppResult<String> {
    resources.auth_manager.authenticate_headers(headers)
}
