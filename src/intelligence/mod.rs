// ABOUTME: Intelligence module for nutrition calculations
// ABOUTME: Exposes the calorie calculator used by profile views and meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

//! # Intelligence Module
//!
//! Deterministic nutrition math. Nothing in here performs I/O.

/// Harris-Benedict calorie requirement and age calculation
pub mod nutrition_calculator;

pub use nutrition_calculator::{
    activity_factor, basal_metabolic_rate, calculate_for_profile, compute_age,
    daily_calorie_requirement, truncate_calorie_target, ActivityLevel, CalorieBreakdown,
};
