// ABOUTME: Biometric profile model used as input to daily calorie calculations
// ABOUTME: Gender keeps unrecognized values verbatim instead of rejecting them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as stored on the profile
///
/// Only `male` and `female` select a BMR formula. Anything else is kept
/// verbatim in `Other` so it round-trips through storage and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    /// Male formula
    Male,
    /// Female formula
    Female,
    /// Unrecognized value (BMR evaluates to zero)
    Other(String),
}

impl Gender {
    /// Wire / storage representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biometric inputs for the calorie calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Formula selector
    pub gender: Gender,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Free-text activity level, e.g. "sedentary" or "very active"
    pub activity_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_keeps_unknown_values() {
        let gender = Gender::from("nonbinary");
        assert_eq!(gender, Gender::Other("nonbinary".to_owned()));
        assert_eq!(String::from(gender), "nonbinary");
        assert_eq!(Gender::from("female"), Gender::Female);
        // Matching is exact, as stored
        assert!(matches!(Gender::from("Male"), Gender::Other(_)));
    }
}
