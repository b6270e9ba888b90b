// ABOUTME: Authentication route handlers for registration, login, and logout
// ABOUTME: Thin axum handlers delegating to the account service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

use super::{authenticate, json_body};
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::services::{LoginRequest, MessageResponse, RegisterRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/register", post(Self::handle_register))
            .route("/login", post(Self::handle_login))
            .route("/logout", post(Self::handle_logout))
            .with_state(resources)
    }

    /// Handle POST /register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RegisterRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(body)?;
        let user = resources.accounts.register(request).await?;
        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle POST /login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(body)?;
        let response = resources.accounts.login(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /logout
    ///
    /// Tokens are stateless; the client discards its copy.
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let username = authenticate(&headers, &resources)?;
        AppLogger::log_auth_event(&username, "logout", true, None);
        Ok((StatusCode::OK, Json(MessageResponse::new("Logged out"))).into_response())
    }
}
