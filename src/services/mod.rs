// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Account management and meal-plan orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

//! Domain service layer
//!
//! Route handlers authenticate and translate HTTP; everything else lives here
//! so it can be exercised without a server.

/// Registration, login, and profile management
pub mod accounts;

/// Profile to calorie target to detailed meal plan
pub mod meal_plan;

pub use accounts::{
    AccountService, LoginRequest, LoginResponse, MessageResponse, ProfileView, RegisterRequest,
    UpdateProfileRequest,
};
pub use meal_plan::{AggregatedMealPlan, MealPlanService, PlannedMeal};
