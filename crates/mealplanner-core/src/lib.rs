// ABOUTME: Core types and constants for the meal planner server
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

#![deny(unsafe_code)]

//! # Meal Planner Core
//!
//! Foundation crate providing shared types and constants for the meal planner
//! server. This crate changes infrequently, so the server crate gets incremental
//! compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Users and biometric profiles

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (User, Profile, Gender)
pub mod models;
