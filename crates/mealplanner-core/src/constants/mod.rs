// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for nutrition formulas, networking, and the upstream API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used in logs
pub mod service_names {
    /// Server binary / tracing target name
    pub const MEALPLANNER_SERVER: &str = "mealplanner-server";
    /// Name of the upstream recipe planning service in error messages
    pub const RECIPE_SERVICE: &str = "Spoonacular API";
}

/// Network defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 2001;
    /// Default outbound HTTP client timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
    /// Default base URL of the recipe planning service
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
    /// Default JWT lifetime in hours
    pub const JWT_EXPIRY_HOURS: i64 = 1;
    /// Deadline for one whole meal-plan orchestration in seconds
    pub const MEALPLAN_TIMEOUT_SECS: u64 = 30;
    /// Recipe detail fetches in flight per request (1 = sequential)
    pub const MEALPLAN_DETAIL_CONCURRENCY: usize = 1;
    /// Default CORS allow list
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names
pub mod env_config {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HMAC secret for session tokens
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Session token lifetime
    pub const JWT_EXPIRY_HOURS: &str = "JWT_EXPIRY_HOURS";
    /// Listening port
    pub const PORT: &str = "PORT";
    /// Listening port (alternate name)
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Outbound HTTP timeout
    pub const HTTP_TIMEOUT: &str = "HTTP_TIMEOUT";
    /// Recipe service credential
    pub const SPOONACULAR_API_KEY: &str = "SPOONACULAR_API_KEY";
    /// Recipe service base URL
    pub const SPOONACULAR_BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Orchestration deadline
    pub const MEALPLAN_TIMEOUT_SECS: &str = "MEALPLAN_TIMEOUT_SECS";
    /// Recipe detail fetch concurrency
    pub const MEALPLAN_DETAIL_CONCURRENCY: &str = "MEALPLAN_DETAIL_CONCURRENCY";
    /// Comma separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Harris-Benedict coefficients and activity multipliers
pub mod nutrition {
    /// Male BMR constant term
    pub const MALE_BMR_BASE: f64 = 88.362;
    /// Male kcal per kg of body weight
    pub const MALE_WEIGHT_COEF: f64 = 13.397;
    /// Male kcal per cm of height
    pub const MALE_HEIGHT_COEF: f64 = 4.799;
    /// Male kcal per year of age (subtracted)
    pub const MALE_AGE_COEF: f64 = 5.677;

    /// Female BMR constant term
    pub const FEMALE_BMR_BASE: f64 = 447.593;
    /// Female kcal per kg of body weight
    pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
    /// Female kcal per cm of height
    pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
    /// Female kcal per year of age (subtracted)
    pub const FEMALE_AGE_COEF: f64 = 4.330;

    /// Little or no exercise
    pub const SEDENTARY_FACTOR: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE_FACTOR: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE_FACTOR: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE_FACTOR: f64 = 1.725;
    /// Physical job or training twice a day
    pub const EXTRA_ACTIVE_FACTOR: f64 = 1.9;
}

/// Validation limits and formats
pub mod limits {
    /// Minimum password length accepted at registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Longest token lifetime accepted from configuration (one year)
    pub const MAX_JWT_EXPIRY_HOURS: i64 = 8760;
    /// Birth date wire format
    pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";
}
