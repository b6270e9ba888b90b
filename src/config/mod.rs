// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads environment-driven configuration for the HTTP server and its collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

//! Configuration module for the meal planner server
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AuthConfig, CorsConfig, DatabaseConfig, Environment, MealPlanConfig, ServerConfig,
    SpoonacularConfig,
};
