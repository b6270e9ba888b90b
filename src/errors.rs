// ABOUTME: Unified error handling re-exported from mealplanner-core
// ABOUTME: Single import point for AppError, AppResult, and ErrorCode inside the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

pub use mealplanner_core::errors::*;
