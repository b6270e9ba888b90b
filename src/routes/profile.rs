// ABOUTME: Profile route handlers for viewing and updating the caller's account
// ABOUTME: GET returns computed age and calorie needs, PUT applies partial updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

use super::{authenticate, json_body};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::{MessageResponse, UpdateProfileRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/user", get(Self::handle_get).put(Self::handle_update))
            .with_state(resources)
    }

    /// Handle GET /user
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let username = authenticate(&headers, &resources)?;
        let view = resources
            .accounts
            .profile(&username, Utc::now().date_naive())
            .await?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Handle PUT /user
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<UpdateProfileRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let username = authenticate(&headers, &resources)?;
        let request = json_body(body)?;
        resources.accounts.update_profile(&username, request).await?;
        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Profile updated")),
        )
            .into_response())
    }
}
