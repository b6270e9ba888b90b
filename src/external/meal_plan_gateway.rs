// ABOUTME: Gateway contract for the external recipe planning service
// ABOUTME: Request/response models, query encoding, and gateway error taxonomy

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

//! Meal-plan gateway contract
//!
//! The server never plans meals itself. It asks the recipe service for a plan
//! at a calorie target and then asks for recipe details per planned meal.
//! [`MealPlanGateway`] is the seam between that flow and the network so the
//! orchestrator can run against a stub in tests.

use crate::constants::service_names;
use crate::errors::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Planning horizon accepted by the recipe service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    /// Three meals for one day
    #[default]
    Day,
    /// Twenty-one meals for a week
    Week,
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Week => f.write_str("week"),
        }
    }
}

/// Parameters of one generate-plan call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// Planning horizon
    pub time_frame: TimeFrame,
    /// Whole-number daily calorie target
    pub target_calories: u32,
}

impl MealPlanRequest {
    /// Request a single day at `target_calories`
    #[must_use]
    pub const fn daily(target_calories: u32) -> Self {
        Self {
            time_frame: TimeFrame::Day,
            target_calories,
        }
    }

    /// Encode as the outbound query string, e.g. `timeFrame=day&targetCalories=2000`
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be URL-encoded
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }

    /// Decode from an outbound query string
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or malformed
    pub fn from_query_string(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(query)
    }
}

/// One planned meal as returned by generate-plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MealSummary {
    /// Recipe identifier, used for the detail lookup
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image file extension, e.g. "jpg"
    pub image_type: String,
    /// Preparation time
    pub ready_in_minutes: u32,
    /// Number of servings
    pub servings: u32,
    /// Original recipe page
    pub source_url: String,
}

/// Plan-level nutrient totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanNutrients {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub fat: f64,
    /// grams
    pub carbohydrates: f64,
}

/// Decoded generate-plan response
///
/// `meals` is required so that a body which is not a plan object fails to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanResult {
    /// Planned meals in the order the service returned them
    pub meals: Vec<MealSummary>,
    /// Totals for the whole plan
    #[serde(default)]
    pub nutrients: PlanNutrients,
}

/// A single nutrient line of a recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Nutrient {
    /// Nutrient name, e.g. "Protein"
    pub name: String,
    /// Amount per serving
    pub amount: f64,
    /// Unit, e.g. "g" or "kcal"
    pub unit: String,
}

/// Recipe detail with nutrition, flattened from the service response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeDetail {
    /// Recipe identifier
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Number of servings
    pub servings: u32,
    /// Nutrients in the order the service returned them
    pub nutrients: Vec<Nutrient>,
}

/// Which gateway operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOperation {
    /// `/mealplanner/generate`
    GeneratePlan,
    /// `/recipes/{id}/information`
    RecipeDetail,
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneratePlan => f.write_str("generate meal plan"),
            Self::RecipeDetail => f.write_str("get recipe information"),
        }
    }
}

/// Failure of a single gateway call; never retried
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The service answered with a status other than 200
    #[error("{operation}: unexpected status code {status}")]
    Status {
        /// Failed operation
        operation: GatewayOperation,
        /// HTTP status returned
        status: u16,
    },
    /// The body did not match the expected schema
    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        /// Failed operation
        operation: GatewayOperation,
        /// JSON error
        #[source]
        source: serde_json::Error,
    },
    /// DNS, connect, TLS, or timeout failure before a response was read
    #[error("{operation}: transport error: {source}")]
    Transport {
        /// Failed operation
        operation: GatewayOperation,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        Self::external_service(service_names::RECIPE_SERVICE, error.to_string()).with_source(error)
    }
}

/// Outbound calls to the recipe planning service
#[async_trait]
pub trait MealPlanGateway: Send + Sync {
    /// Ask the service for a plan at the requested calorie target
    async fn generate_plan(&self, request: &MealPlanRequest) -> Result<PlanResult, GatewayError>;

    /// Fetch one recipe, optionally with its nutrient breakdown
    async fn get_recipe_detail(
        &self,
        recipe_id: i64,
        include_nutrition: bool,
    ) -> Result<RecipeDetail, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_query_round_trip() {
        let request = MealPlanRequest {
            time_frame: TimeFrame::Day,
            target_calories: 2000,
        };
        let query = request.to_query_string().unwrap_or_default();
        assert_eq!(query, "timeFrame=day&targetCalories=2000");

        let parsed = MealPlanRequest::from_query_string(&query).ok();
        assert_eq!(parsed, Some(request));
    }

    #[test]
    fn test_plan_result_requires_meals() {
        assert!(serde_json::from_str::<PlanResult>("[]").is_err());
        assert!(serde_json::from_str::<PlanResult>("{}").is_err());

        let plan: Option<PlanResult> = serde_json::from_str(r#"{"meals": []}"#).ok();
        assert_eq!(plan, Some(PlanResult::default()));
    }

    #[test]
    fn test_query_rejects_unknown_time_frame() {
        assert!(MealPlanRequest::from_query_string("timeFrame=month&targetCalories=1").is_err());
    }
}
