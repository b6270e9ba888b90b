// ABOUTME: Main library entry point for the meal planner API server
// ABOUTME: Calorie calculation, recipe-service gateway, orchestration, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

#![deny(unsafe_code)]

//! # Meal Planner Server
//!
//! An HTTP API that turns a user's biometric profile into a daily meal plan.
//!
//! ## Flow
//!
//! 1. The caller authenticates with a bearer token issued at `/login`
//! 2. The stored profile yields a daily calorie requirement (Harris-Benedict)
//! 3. The recipe planning service returns a plan at that calorie target
//! 4. Each planned meal is enriched with recipe details and nutrition
//!
//! ## Architecture
//!
//! - **Intelligence**: pure calorie math
//! - **External**: gateway trait plus the Spoonacular HTTP client
//! - **Services**: account management and meal-plan orchestration
//! - **Database**: user storage behind a trait, `SQLite` in production
//! - **Routes**: thin axum handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplanner_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Meal planner configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Token issuance, validation, and password hashing
pub mod auth;

/// Configuration loaded from the environment
pub mod config;

/// Application constants and defaults
pub mod constants;

/// User storage
pub mod database;

/// Unified error handling
pub mod errors;

/// Clients for external services
pub mod external;

/// Nutrition calculations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain models
pub mod models;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Business logic services
pub mod services;
