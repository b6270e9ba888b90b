// ABOUTME: Spoonacular API client implementing the meal-plan gateway over reqwest
// ABOUTME: Single-attempt GET calls with a shared, timeout-bounded HTTP client

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

//! Spoonacular API Client
//!
//! Two endpoints are used:
//! - `GET {base}/mealplanner/generate?timeFrame=..&targetCalories=..&apiKey=..`
//! - `GET {base}/recipes/{id}/information?includeNutrition=..&apiKey=..`
//!
//! Every call is attempted exactly once. Non-200 statuses, undecodable bodies
//! and transport failures come back as distinct [`GatewayError`] variants.
//!
//! # Example
//! ```rust,no_run
//! use mealplanner_server::external::{
//!     MealPlanGateway, MealPlanRequest, SpoonacularClient, SpoonacularClientConfig,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpoonacularClient::new(SpoonacularClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..SpoonacularClientConfig::default()
//! })?;
//! let plan = client.generate_plan(&MealPlanRequest::daily(2000)).await?;
//! # Ok(())
//! # }
//! ```

use super::meal_plan_gateway::{
    GatewayError, GatewayOperation, MealPlanGateway, MealPlanRequest, Nutrient, PlanResult,
    RecipeDetail,
};
use crate::config::SpoonacularConfig;
use crate::constants::defaults;
use crate::logging::AppLogger;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// API key sent as `apiKey`
    pub api_key: String,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: defaults::SPOONACULAR_BASE_URL.to_owned(),
            timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
        }
    }
}

impl From<&SpoonacularConfig> for SpoonacularClientConfig {
    fn from(config: &SpoonacularConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout: config.http_timeout,
        }
    }
}

/// Recipe information response
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecipeInformationResponse {
    id: i64,
    title: String,
    image: String,
    servings: u32,
    nutrition: NutritionResponse,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NutritionResponse {
    nutrients: Vec<Nutrient>,
}

impl From<RecipeInformationResponse> for RecipeDetail {
    fn from(response: RecipeInformationResponse) -> Self {
        Self {
            id: response.id,
            title: response.title,
            image: response.image,
            servings: response.servings,
            nutrients: response.nutrition.nutrients,
        }
    }
}

/// Spoonacular API client
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new client with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(mut config: SpoonacularClientConfig) -> Result<Self, reqwest::Error> {
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: GatewayOperation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let started = Instant::now();
        let result = Self::send_and_decode(operation, request).await;
        AppLogger::log_upstream_call(
            &operation.to_string(),
            result.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        result
    }

    async fn send_and_decode<T: DeserializeOwned>(
        operation: GatewayOperation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GatewayError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Transport { operation, source })?;

        serde_json::from_slice(&body).map_err(|source| GatewayError::Decode { operation, source })
    }
}

#[async_trait]
impl MealPlanGateway for SpoonacularClient {
    async fn generate_plan(&self, request: &MealPlanRequest) -> Result<PlanResult, GatewayError> {
        let url = format!("{}/mealplanner/generate", self.config.base_url);
        let builder = self
            .http_client
            .get(&url)
            .query(request)
            .query(&[("apiKey", self.config.api_key.as_str())]);

        self.get_json(GatewayOperation::GeneratePlan, builder).await
    }

    async fn get_recipe_detail(
        &self,
        recipe_id: i64,
        include_nutrition: bool,
    ) -> Result<RecipeDetail, GatewayError> {
        let url = format!("{}/recipes/{recipe_id}/information", self.config.base_url);
        let builder = self.http_client.get(&url).query(&[
            ("includeNutrition", include_nutrition.to_string().as_str()),
            ("apiKey", self.config.api_key.as_str()),
        ]);

        let response: RecipeInformationResponse = self
            .get_json(GatewayOperation::RecipeDetail, builder)
            .await?;
        Ok(response.into())
    }
}
