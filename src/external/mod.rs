// ABOUTME: External API client modules (recipe planning service)
// ABOUTME: Gateway contract plus the Spoonacular HTTP implementation

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

//! External API Clients

/// Gateway trait, request/response models, and gateway errors
pub mod meal_plan_gateway;
/// reqwest-backed Spoonacular client
pub mod spoonacular_client;

pub use meal_plan_gateway::{
    GatewayError, GatewayOperation, MealPlanGateway, MealPlanRequest, MealSummary, Nutrient,
    PlanNutrients, PlanResult, RecipeDetail, TimeFrame,
};
pub use spoonacular_client::{SpoonacularClient, SpoonacularClientConfig};
