// ABOUTME: Core data models for the meal planner server
// ABOUTME: Re-exports User, Profile, and Gender

//! # Data Models
//!
//! - `User`: an account with credentials and a biometric profile
//! - `Profile`: the inputs to the calorie calculation
//! - `Gender`: formula selector, tolerant of unrecognized values

mod profile;
mod user;

pub use profile::{Gender, Profile};
pub use user::User;
