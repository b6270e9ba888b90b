// ABOUTME: Account business logic extracted from route handlers
// ABOUTME: Registration, login, profile view, and partial profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

use crate::auth::{hash_password, verify_password, AuthManager};
use crate::constants::limits::{BIRTH_DATE_FORMAT, MIN_PASSWORD_LENGTH};
use crate::database::UserStore;
use crate::errors::{AppError, AppResult};
use crate::intelligence::calculate_for_profile;
use crate::logging::AppLogger;
use crate::models::{Gender, Profile, User};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Unique login name
    pub username: String,
    /// Plain-text password, at least 8 characters
    pub password: String,
    /// Unique email address
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub full_name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// "male", "female", or anything else
    pub gender: String,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    /// e.g. "sedentary", "lightly active"
    pub activity_level: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plain-text password
    pub password: String,
}

/// User login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token
    pub token: String,
    /// Token expiry
    pub expires_at: DateTime<Utc>,
}

/// Partial profile update; empty strings and zero numbers leave a field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    /// New email
    pub email: String,
    /// New display name
    pub full_name: String,
    /// New birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// New gender
    pub gender: String,
    /// New weight in kilograms
    pub weight: f64,
    /// New height in centimeters
    pub height: f64,
    /// New activity level
    pub activity_level: String,
}

/// Profile with computed age and calorie requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileView {
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Age in whole years as of today
    pub age: i32,
    /// Gender as stored
    pub gender: Gender,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    /// Activity level as stored
    pub activity_level: String,
    /// Untruncated daily calorie requirement
    pub daily_calorie_required: f64,
}

/// Simple acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human readable message
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Account service for registration, login, and profile management
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    auth_manager: Arc<AuthManager>,
}

impl AccountService {
    /// Create a new account service
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, auth_manager: Arc<AuthManager>) -> Self {
        Self {
            store,
            auth_manager,
        }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed fields and `ResourceAlreadyExists`
    /// when the username or email is taken
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        tracing::info!("User registration attempt for username: {}", request.username);

        if request.username.trim().is_empty() {
            return Err(AppError::invalid_input("Username is required"));
        }
        if !Self::is_valid_email(&request.email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if !Self::is_valid_password(&request.password) {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }
        if request.gender.trim().is_empty() {
            return Err(AppError::invalid_input("Gender is required"));
        }
        if request.activity_level.trim().is_empty() {
            return Err(AppError::invalid_input("Activity level is required"));
        }
        let birth_date = Self::parse_birth_date(&request.birth_date)?;
        Self::validate_measurement("Weight", request.weight)?;
        Self::validate_measurement("Height", request.height)?;

        let password_hash = hash_password(request.password).await?;

        let user = User::new(
            request.username,
            request.email,
            request.full_name,
            password_hash,
            Profile {
                gender: Gender::from(request.gender),
                weight_kg: request.weight,
                height_cm: request.height,
                birth_date,
                activity_level: request.activity_level,
            },
        );

        self.store.create_user(&user).await?;

        AppLogger::log_auth_event(&user.username, "register", true, None);
        Ok(user)
    }

    /// Check credentials and issue a session token
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` with the same message for unknown users and wrong
    /// passwords
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let Some(user) = self.store.find_by_username(&request.username).await? else {
            AppLogger::log_auth_event(&request.username, "login", false, Some("unknown user"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        if !verify_password(request.password, user.password_hash.clone()).await? {
            AppLogger::log_auth_event(&user.username, "login", false, Some("wrong password"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        let issued = self.auth_manager.generate_token(&user.username)?;
        AppLogger::log_auth_event(&user.username, "login", true, None);

        Ok(LoginResponse {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Profile with age and calorie requirement computed as of `as_of`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user no longer exists
    pub async fn profile(&self, username: &str, as_of: NaiveDate) -> AppResult<ProfileView> {
        let user = self.load_user(username).await?;
        let breakdown = calculate_for_profile(&user.profile, as_of);

        Ok(ProfileView {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            birth_date: user.profile.birth_date,
            age: breakdown.age,
            gender: user.profile.gender,
            weight: user.profile.weight_kg,
            height: user.profile.height_cm,
            activity_level: user.profile.activity_level,
            daily_calorie_required: breakdown.daily_calories,
        })
    }

    /// Apply the non-empty fields of `request` to the stored profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed fields, `ResourceNotFound` if the
    /// user no longer exists, and `ResourceAlreadyExists` if the new email is
    /// taken
    pub async fn update_profile(
        &self,
        username: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<User> {
        let mut user = self.load_user(username).await?;

        if !request.email.is_empty() {
            if !Self::is_valid_email(&request.email) {
                return Err(AppError::invalid_input("Invalid email format"));
            }
            user.email = request.email;
        }
        if !request.full_name.is_empty() {
            user.full_name = request.full_name;
        }
        if !request.birth_date.is_empty() {
            user.profile.birth_date = Self::parse_birth_date(&request.birth_date)?;
        }
        if !request.gender.is_empty() {
            user.profile.gender = Gender::from(request.gender);
        }
        if request.weight != 0.0 {
            Self::validate_measurement("Weight", request.weight)?;
            user.profile.weight_kg = request.weight;
        }
        if request.height != 0.0 {
            Self::validate_measurement("Height", request.height)?;
            user.profile.height_cm = request.height;
        }
        if !request.activity_level.is_empty() {
            user.profile.activity_level = request.activity_level;
        }
        user.updated_at = Utc::now();

        self.store.update_user(&user).await?;
        tracing::info!("Profile updated for user: {}", user.username);
        Ok(user)
    }

    async fn load_user(&self, username: &str) -> AppResult<User> {
        self.store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    /// Validate email format
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        if email.len() <= 5 {
            return false;
        }
        let Some(at_pos) = email.find('@') else {
            return false;
        };
        if at_pos == 0 || at_pos == email.len() - 1 {
            return false;
        }
        let domain_part = &email[at_pos + 1..];
        domain_part.contains('.') && !domain_part.contains('@')
    }

    /// Validate password length
    #[must_use]
    pub fn is_valid_password(password: &str) -> bool {
        password.chars().count() >= MIN_PASSWORD_LENGTH
    }

    /// Parse a `YYYY-MM-DD` birth date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the date is malformed
    pub fn parse_birth_date(raw: &str) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
            .map_err(|_| AppError::invalid_input("birth_date must use the YYYY-MM-DD format"))
    }

    fn validate_measurement(name: &str, value: f64) -> AppResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!("{name} must be a positive number")))
        }
    }
}
