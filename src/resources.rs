// ABOUTME: Centralized resource container shared by all HTTP handlers
// ABOUTME: Built once at startup and passed to routes behind an Arc
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

//! # Server Resources
//!
//! Every expensive collaborator (database pool, HTTP client, signing keys) is
//! created once here and shared immutably.

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::UserStore;
use crate::external::MealPlanGateway;
use crate::services::{AccountService, MealPlanService};
use std::sync::Arc;

/// Shared server state
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Token signing and validation
    pub auth_manager: Arc<AuthManager>,
    /// User storage
    pub user_store: Arc<dyn UserStore>,
    /// Recipe planning gateway
    pub gateway: Arc<dyn MealPlanGateway>,
    /// Registration, login, and profile logic
    pub accounts: AccountService,
    /// Meal-plan orchestration
    pub meal_plans: MealPlanService,
}

impl ServerResources {
    /// Wire services from their collaborators
    #[must_use]
    pub fn new(
        config: ServerConfig,
        user_store: Arc<dyn UserStore>,
        gateway: Arc<dyn MealPlanGateway>,
    ) -> Self {
        let auth_manager = Arc::new(AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_hours,
        ));
        let accounts = AccountService::new(Arc::clone(&user_store), Arc::clone(&auth_manager));
        let meal_plans = MealPlanService::new(
            Arc::clone(&user_store),
            Arc::clone(&gateway),
            config.meal_plan.clone(),
        );

        Self {
            config: Arc::new(config),
            auth_manager,
            user_store,
            gateway,
            accounts,
            meal_plans,
        }
    }
}
