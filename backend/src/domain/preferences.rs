//! Traveller preferences feeding itinerary synthesis.
//!
//! This module defines the `TravelPreferences` input aggregate and the
//! three-tier travel style whose multiplier scales activity pricing.

use serde::{Deserialize, Serialize};

use crate::domain::money::scale_by_percent;

/// The three-tier cost/quality multiplier applied to activity pricing.
///
/// # Examples
///
/// ```
/// # use backend::domain::TravelStyle;
/// assert_eq!(TravelStyle::default(), TravelStyle::Comfort);
/// assert_ne!(TravelStyle::Budget, TravelStyle::Luxury);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    /// Cost-conscious picks; activities priced below base.
    Budget,
    /// Mid-range comfort at base prices.
    #[default]
    Comfort,
    /// Premium picks priced above base.
    Luxury,
}

impl TravelStyle {
    /// Returns the wire string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backend::domain::TravelStyle;
    /// assert_eq!(TravelStyle::Budget.as_str(), "budget");
    /// assert_eq!(TravelStyle::Luxury.as_str(), "luxury");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Comfort => "comfort",
            Self::Luxury => "luxury",
        }
    }

    /// Human-readable label used in generated itinerary highlights.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Budget => "economical",
            Self::Comfort => "comfortable",
            Self::Luxury => "luxurious",
        }
    }
}

impl std::fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown travel style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTravelStyleError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseTravelStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown travel style: {}", self.input)
    }
}

impl std::error::Error for ParseTravelStyleError {}

impl std::str::FromStr for TravelStyle {
    type Err = ParseTravelStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(Self::Budget),
            "comfort" => Ok(Self::Comfort),
            "luxury" => Ok(Self::Luxury),
            _ => Err(ParseTravelStyleError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Style multiplier table as integer percentages.
///
/// Kept configurable rather than hard-coded so deployments can retune
/// pricing; the defaults reproduce the reference policy exactly
/// (budget 0.7, comfort 1.0, luxury 1.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMultipliers {
    /// Percentage applied for [`TravelStyle::Budget`].
    pub budget_percent: u32,
    /// Percentage applied for [`TravelStyle::Comfort`].
    pub comfort_percent: u32,
    /// Percentage applied for [`TravelStyle::Luxury`].
    pub luxury_percent: u32,
}

impl Default for StyleMultipliers {
    fn default() -> Self {
        Self {
            budget_percent: 70,
            comfort_percent: 100,
            luxury_percent: 150,
        }
    }
}

impl StyleMultipliers {
    /// The percentage applied for the given style.
    pub fn percent_for(&self, style: TravelStyle) -> u32 {
        match style {
            TravelStyle::Budget => self.budget_percent,
            TravelStyle::Comfort => self.comfort_percent,
            TravelStyle::Luxury => self.luxury_percent,
        }
    }

    /// Scale a base cost by the style's multiplier, flooring the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backend::domain::{StyleMultipliers, TravelStyle};
    /// let multipliers = StyleMultipliers::default();
    /// assert_eq!(multipliers.scale(500_000, TravelStyle::Budget), 350_000);
    /// assert_eq!(multipliers.scale(500_000, TravelStyle::Luxury), 750_000);
    /// ```
    pub fn scale(&self, base_cost: i64, style: TravelStyle) -> i64 {
        scale_by_percent(base_cost, self.percent_for(style))
    }
}

/// Validation errors for [`TravelPreferences`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferencesValidationError {
    /// Destination is empty or whitespace.
    #[error("destination must not be empty")]
    EmptyDestination,
    /// Duration is zero days.
    #[error("duration must be at least one day")]
    ZeroDuration,
    /// Budget is zero or negative.
    #[error("budget must be positive")]
    NonPositiveBudget,
    /// No interests were selected.
    #[error("at least one interest is required")]
    EmptyInterests,
    /// Group size is zero.
    #[error("group size must be at least one")]
    ZeroGroupSize,
}

/// Immutable input to itinerary synthesis.
///
/// Callers must run [`TravelPreferences::validate`] before synthesis; the
/// synthesiser rejects invalid preferences rather than silently defaulting.
///
/// # Examples
///
/// ```
/// # use backend::domain::{TravelPreferences, TravelStyle};
/// let preferences = TravelPreferences {
///     destination: "Sapa".to_owned(),
///     duration_days: 4,
///     budget: 6_000_000,
///     travel_style: TravelStyle::Comfort,
///     interests: vec!["nature".to_owned()],
///     group_size: 2,
/// };
/// assert!(preferences.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TravelPreferences {
    /// Requested destination name.
    pub destination: String,
    /// Trip length in days.
    pub duration_days: u32,
    /// Total budget in VND.
    pub budget: i64,
    /// Cost/quality tier.
    pub travel_style: TravelStyle,
    /// Interest tags; must be non-empty to proceed.
    pub interests: Vec<String>,
    /// Number of travellers.
    pub group_size: u32,
}

impl TravelPreferences {
    /// Check the invariants required before synthesis.
    pub fn validate(&self) -> Result<(), PreferencesValidationError> {
        if self.destination.trim().is_empty() {
            return Err(PreferencesValidationError::EmptyDestination);
        }
        if self.duration_days == 0 {
            return Err(PreferencesValidationError::ZeroDuration);
        }
        if self.budget <= 0 {
            return Err(PreferencesValidationError::NonPositiveBudget);
        }
        if self.interests.iter().all(|tag| tag.trim().is_empty()) {
            return Err(PreferencesValidationError::EmptyInterests);
        }
        if self.group_size == 0 {
            return Err(PreferencesValidationError::ZeroGroupSize);
        }
        Ok(())
    }
}
