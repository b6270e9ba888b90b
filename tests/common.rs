// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted gateway stub, test configuration, and user fixtures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealplanner_server`

use async_trait::async_trait;
use chrono::NaiveDate;
use mealplanner_server::{
    config::{
        AuthConfig, CorsConfig, DatabaseConfig, Environment, MealPlanConfig, ServerConfig,
        SpoonacularConfig,
    },
    database::{InMemoryUserStore, UserStore},
    external::{
        GatewayError, GatewayOperation, MealPlanGateway, MealPlanRequest, MealSummary,
        PlanNutrients, PlanResult, RecipeDetail,
    },
    models::{Gender, Profile, User},
    resources::ServerResources,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Female profile whose sedentary target on 2024-06-15 truncates to 1665
pub fn reference_female_profile() -> Profile {
    Profile {
        gender: Gender::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        birth_date: date(1995, 6, 15),
        activity_level: "sedentary".to_owned(),
    }
}

pub fn user_with_profile(username: &str, profile: Profile) -> User {
    User::new(
        username.to_owned(),
        format!("{username}@example.com"),
        String::new(),
        "not-a-real-hash".to_owned(),
        profile,
    )
}

pub async fn store_with_user(user: &User) -> Arc<InMemoryUserStore> {
    let store = Arc::new(InMemoryUserStore::new());
    store.create_user(user).await.unwrap();
    store
}

pub fn meal(id: i64, title: &str) -> MealSummary {
    MealSummary {
        id,
        title: title.to_owned(),
        image_type: "jpg".to_owned(),
        ready_in_minutes: 20,
        servings: 1,
        source_url: format!("https://recipes.example.com/{id}"),
    }
}

pub fn recipe(id: i64, title: &str) -> RecipeDetail {
    RecipeDetail {
        id,
        title: title.to_owned(),
        image: format!("https://img.example.com/{id}.jpg"),
        servings: 1,
        nutrients: Vec::new(),
    }
}

pub fn plan_of(meals: Vec<MealSummary>) -> PlanResult {
    PlanResult {
        meals,
        nutrients: PlanNutrients {
            calories: 1650.0,
            protein: 80.0,
            fat: 55.0,
            carbohydrates: 200.0,
        },
    }
}

/// Scripted [`MealPlanGateway`] that records every call
pub struct StubGateway {
    plan: Option<PlanResult>,
    failing_details: Vec<i64>,
    detail_delays: HashMap<i64, Duration>,
    plan_delay: Duration,
    generate_calls: Mutex<Vec<MealPlanRequest>>,
    detail_calls: Mutex<Vec<i64>>,
}

impl StubGateway {
    /// Gateway whose generate-plan call returns `plan`
    pub fn with_plan(plan: PlanResult) -> Self {
        Self {
            plan: Some(plan),
            failing_details: Vec::new(),
            detail_delays: HashMap::new(),
            plan_delay: Duration::ZERO,
            generate_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    /// Gateway whose generate-plan call fails with status 402
    pub fn failing_plan() -> Self {
        Self {
            plan: None,
            ..Self::with_plan(PlanResult::default())
        }
    }

    pub fn fail_detail(mut self, id: i64) -> Self {
        self.failing_details.push(id);
        self
    }

    pub fn delay_detail(mut self, id: i64, delay: Duration) -> Self {
        self.detail_delays.insert(id, delay);
        self
    }

    pub fn delay_plan(mut self, delay: Duration) -> Self {
        self.plan_delay = delay;
        self
    }

    pub fn generate_calls(&self) -> Vec<MealPlanRequest> {
        self.generate_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<i64> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MealPlanGateway for StubGateway {
    async fn generate_plan(&self, request: &MealPlanRequest) -> Result<PlanResult, GatewayError> {
        self.generate_calls.lock().unwrap().push(*request);
        if !self.plan_delay.is_zero() {
            tokio::time::sleep(self.plan_delay).await;
        }
        self.plan.clone().ok_or(GatewayError::Status {
            operation: GatewayOperation::GeneratePlan,
            status: 402,
        })
    }

    async fn get_recipe_detail(
        &self,
        recipe_id: i64,
        _include_nutrition: bool,
    ) -> Result<RecipeDetail, GatewayError> {
        self.detail_calls.lock().unwrap().push(recipe_id);
        if let Some(delay) = self.detail_delays.get(&recipe_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_details.contains(&recipe_id) {
            return Err(GatewayError::Status {
                operation: GatewayOperation::RecipeDetail,
                status: 404,
            });
        }
        Ok(recipe(recipe_id, &format!("Recipe {recipe_id}")))
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_owned(),
            jwt_expiry_hours: 1,
        },
        spoonacular: SpoonacularConfig {
            api_key: "test-key".to_owned(),
            base_url: "http://127.0.0.1:9".to_owned(),
            http_timeout: Duration::from_secs(5),
        },
        meal_plan: MealPlanConfig::default(),
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

pub fn test_resources(
    store: Arc<dyn UserStore>,
    gateway: Arc<dyn MealPlanGateway>,
) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(test_config(), store, gateway))
}
