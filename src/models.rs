// ABOUTME: Domain models re-exported from mealplanner-core
// ABOUTME: Users and biometric profiles shared by storage, services, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

pub use mealplanner_core::models::*;
