// ABOUTME: Daily calorie requirement from a biometric profile
// ABOUTME: Harris-Benedict BMR, activity multipliers, and date-relative age
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

//! Nutrition Calculator Module
//!
//! Pure functions over an already-validated [`Profile`]. Nothing here fails:
//! unknown activity levels fall back to the sedentary multiplier and unknown
//! genders produce a BMR of zero.
//!
//! # Reference
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use crate::constants::nutrition::{
    EXTRA_ACTIVE_FACTOR, FEMALE_AGE_COEF, FEMALE_BMR_BASE, FEMALE_HEIGHT_COEF,
    FEMALE_WEIGHT_COEF, LIGHTLY_ACTIVE_FACTOR, MALE_AGE_COEF, MALE_BMR_BASE, MALE_HEIGHT_COEF,
    MALE_WEIGHT_COEF, MODERATELY_ACTIVE_FACTOR, SEDENTARY_FACTOR, VERY_ACTIVE_FACTOR,
};
use crate::models::{Gender, Profile};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Known activity levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "lightly active")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "moderately active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "very active")]
    VeryActive,
    /// Physical job or training twice a day
    #[serde(rename = "extra active")]
    ExtraActive,
}

impl ActivityLevel {
    /// Parse the stored free-text level; exact match only
    #[must_use]
    pub fn parse(level: &str) -> Option<Self> {
        match level {
            "sedentary" => Some(Self::Sedentary),
            "lightly active" => Some(Self::LightlyActive),
            "moderately active" => Some(Self::ModeratelyActive),
            "very active" => Some(Self::VeryActive),
            "extra active" => Some(Self::ExtraActive),
            _ => None,
        }
    }

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => SEDENTARY_FACTOR,
            Self::LightlyActive => LIGHTLY_ACTIVE_FACTOR,
            Self::ModeratelyActive => MODERATELY_ACTIVE_FACTOR,
            Self::VeryActive => VERY_ACTIVE_FACTOR,
            Self::ExtraActive => EXTRA_ACTIVE_FACTOR,
        }
    }
}

/// Everything derived from one profile snapshot on one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    /// Whole years, see [`compute_age`]
    pub age: i32,
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// Multiplier applied to the BMR
    pub activity_factor: f64,
    /// BMR x activity factor
    pub daily_calories: f64,
}

/// Whole years between `birth_date` and `as_of`
///
/// Compares day-of-year ordinals rather than month/day pairs, so a birthday
/// can be counted a day early or late around Feb 29 in leap years. Changing
/// this would silently shift calorie targets for existing users.
#[must_use]
pub fn compute_age(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if as_of.ordinal() < birth_date.ordinal() {
        age -= 1;
    }
    age
}

/// Activity multiplier for a free-text level, sedentary when unrecognized
#[must_use]
pub fn activity_factor(level: &str) -> f64 {
    ActivityLevel::parse(level).map_or(SEDENTARY_FACTOR, ActivityLevel::factor)
}

/// Harris-Benedict basal metabolic rate in kcal/day
///
/// - Male: `88.362 + 13.397 x weight_kg + 4.799 x height_cm - 5.677 x age`
/// - Female: `447.593 + 9.247 x weight_kg + 3.098 x height_cm - 4.330 x age`
/// - Anything else: `0.0`
#[must_use]
pub fn basal_metabolic_rate(profile: &Profile, age: i32) -> f64 {
    let age = f64::from(age);
    match profile.gender {
        Gender::Male => MALE_AGE_COEF.mul_add(
            -age,
            MALE_HEIGHT_COEF.mul_add(
                profile.height_cm,
                MALE_WEIGHT_COEF.mul_add(profile.weight_kg, MALE_BMR_BASE),
            ),
        ),
        Gender::Female => FEMALE_AGE_COEF.mul_add(
            -age,
            FEMALE_HEIGHT_COEF.mul_add(
                profile.height_cm,
                FEMALE_WEIGHT_COEF.mul_add(profile.weight_kg, FEMALE_BMR_BASE),
            ),
        ),
        Gender::Other(_) => 0.0,
    }
}

/// Total daily energy expenditure: BMR x activity factor
#[must_use]
pub fn daily_calorie_requirement(profile: &Profile, age: i32) -> f64 {
    basal_metabolic_rate(profile, age) * activity_factor(&profile.activity_level)
}

/// Age, BMR, factor, and daily calories for `profile` evaluated on `as_of`
#[must_use]
pub fn calculate_for_profile(profile: &Profile, as_of: NaiveDate) -> CalorieBreakdown {
    let age = compute_age(profile.birth_date, as_of);
    let bmr = basal_metabolic_rate(profile, age);
    let factor = activity_factor(&profile.activity_level);
    CalorieBreakdown {
        age,
        bmr,
        activity_factor: factor,
        daily_calories: bmr * factor,
    }
}

/// Whole-number target accepted by the planning service
///
/// Truncates toward zero; negative or NaN inputs saturate to 0.
#[must_use]
pub fn truncate_calorie_target(daily_calories: f64) -> u32 {
    daily_calories as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(1990, 6, 15);
        assert_eq!(compute_age(birth, date(2023, 6, 14)), 32);
        assert_eq!(compute_age(birth, date(2023, 6, 15)), 33);
        assert_eq!(compute_age(birth, date(2023, 12, 31)), 33);
    }

    #[test]
    fn test_age_uses_day_of_year_in_leap_years() {
        // Mar 1 is ordinal 60 in 1999 but 61 in 2024, so the birthday counts
        // on Feb 29 of the leap year.
        let birth = date(1999, 3, 1);
        assert_eq!(compute_age(birth, date(2024, 2, 29)), 25);

        // Jun 14 2024 and Jun 15 1990 are both ordinal 166.
        assert_eq!(compute_age(date(1990, 6, 15), date(2024, 6, 14)), 34);
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(truncate_calorie_target(1665.99), 1665);
        assert_eq!(truncate_calorie_target(-3.0), 0);
        assert_eq!(truncate_calorie_target(f64::NAN), 0);
    }
}
