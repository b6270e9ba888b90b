// ABOUTME: Application constants re-exported from mealplanner-core
// ABOUTME: Keeps `crate::constants::...` paths stable for server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

pub use mealplanner_core::constants::*;
