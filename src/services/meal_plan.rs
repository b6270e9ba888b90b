// ABOUTME: Meal-plan orchestration from stored profile to detailed daily plan
// ABOUTME: Calorie target, generate-plan call, per-meal recipe details, deadline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

//! Meal-plan orchestration
//!
//! A failed generate-plan call fails the request. A failed recipe-detail call
//! only drops that meal. Both phases share one deadline; when it fires, the
//! in-flight calls are dropped and the request fails.

use crate::config::MealPlanConfig;
use crate::constants::service_names;
use crate::database::UserStore;
use crate::errors::{AppError, AppResult};
use crate::external::{
    GatewayError, MealPlanGateway, MealPlanRequest, MealSummary, PlanNutrients, RecipeDetail,
};
use crate::intelligence::{calculate_for_profile, truncate_calorie_target};
use crate::logging::AppLogger;
use chrono::NaiveDate;
use futures_util::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// A planned meal with its recipe detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedMeal {
    /// Summary from the generate-plan response
    pub meal: MealSummary,
    /// Detail with nutrition
    pub recipe: RecipeDetail,
}

/// Response of a successful meal-plan generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedMealPlan {
    /// Daily calorie requirement before truncation
    pub target_calories: f64,
    /// Whole-number target sent to the planning service
    pub requested_calories: u32,
    /// Meals whose details were fetched, in planned order
    pub meals: Vec<PlannedMeal>,
    /// Plan-level totals as reported by the planning service
    pub nutrients: PlanNutrients,
}

struct DetailedPlan {
    planned: usize,
    meals: Vec<PlannedMeal>,
    nutrients: PlanNutrients,
}

/// Orchestrates profile lookup, calorie calculation, and gateway calls
#[derive(Clone)]
pub struct MealPlanService {
    store: Arc<dyn UserStore>,
    gateway: Arc<dyn MealPlanGateway>,
    config: MealPlanConfig,
}

impl MealPlanService {
    /// Create a new orchestrator
    #[must_use]
    pub fn new(
        store: Arc<dyn UserStore>,
        gateway: Arc<dyn MealPlanGateway>,
        config: MealPlanConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    /// Generate a one-day plan for `username`, computing age as of `as_of`
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the user does not exist
    /// - `ExternalServiceError` when generate-plan fails or the deadline passes
    /// - `DatabaseError` when the profile cannot be loaded
    #[tracing::instrument(skip(self, username), fields(user.name = %username))]
    pub async fn generate_for(
        &self,
        username: &str,
        as_of: NaiveDate,
    ) -> AppResult<AggregatedMealPlan> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let breakdown = calculate_for_profile(&user.profile, as_of);
        let requested_calories = truncate_calorie_target(breakdown.daily_calories);
        tracing::debug!(
            age = breakdown.age,
            bmr = breakdown.bmr,
            activity_factor = breakdown.activity_factor,
            requested_calories,
            "Calorie target computed"
        );

        let request = MealPlanRequest::daily(requested_calories);
        let deadline = self.config.timeout;
        let plan = tokio::time::timeout(deadline, self.plan_with_details(&request))
            .await
            .map_err(|_| {
                AppError::external_service(
                    service_names::RECIPE_SERVICE,
                    format!("meal plan generation exceeded {}ms", deadline.as_millis()),
                )
            })??;

        AppLogger::log_meal_plan_generated(
            username,
            requested_calories,
            plan.planned,
            plan.meals.len(),
        );

        Ok(AggregatedMealPlan {
            target_calories: breakdown.daily_calories,
            requested_calories,
            meals: plan.meals,
            nutrients: plan.nutrients,
        })
    }

    async fn plan_with_details(
        &self,
        request: &MealPlanRequest,
    ) -> Result<DetailedPlan, GatewayError> {
        let plan = self.gateway.generate_plan(request).await?;
        let planned = plan.meals.len();
        let gateway = Arc::clone(&self.gateway);

        // `buffered` yields in input order regardless of completion order
        let fetched: Vec<(MealSummary, Result<RecipeDetail, GatewayError>)> =
            stream::iter(plan.meals)
                .map(move |meal| {
                    let gateway = Arc::clone(&gateway);
                    async move {
                        let result = gateway.get_recipe_detail(meal.id, true).await;
                        (meal, result)
                    }
                })
                .buffered(self.config.detail_concurrency.max(1))
                .collect()
                .await;

        let meals = fetched
            .into_iter()
            .filter_map(|(meal, result)| match result {
                Ok(recipe) => Some(PlannedMeal { meal, recipe }),
                Err(e) => {
                    warn!(recipe.id = meal.id, "Dropping meal without recipe detail: {e}");
                    None
                }
            })
            .collect();

        Ok(DetailedPlan {
            planned,
            meals,
            nutrients: plan.nutrients,
        })
    }
}
