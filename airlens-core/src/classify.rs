//! AQI category classification
//!
//! Six terminal buckets with inclusive upper bounds, per the EPA scale.
//! A total function: every real number maps to exactly one category, so
//! the classifier never assumes its input was clamped upstream.

use core::fmt;

/// EPA display color for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Good (0-50)
    Green,
    /// Moderate (51-100)
    Yellow,
    /// Unhealthy for sensitive groups (101-150)
    Orange,
    /// Unhealthy (151-200)
    Red,
    /// Very unhealthy (201-300)
    Purple,
    /// Hazardous (301-500)
    Maroon,
}

/// Air quality category, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiCategory {
    /// AQI 0-50
    Good,
    /// AQI 51-100
    Moderate,
    /// AQI 101-150
    UnhealthySensitive,
    /// AQI 151-200
    Unhealthy,
    /// AQI 201-300
    VeryUnhealthy,
    /// AQI 301-500
    Hazardous,
}

impl AqiCategory {
    /// All categories, best to worst.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthySensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Classify a composite score.
    ///
    /// Upper bounds are inclusive. Scores below 0 land in `Good` and
    /// scores above 500 in `Hazardous`; no clamping happens here.
    pub fn from_score(score: f32) -> Self {
        if score <= 50.0 {
            AqiCategory::Good
        } else if score <= 100.0 {
            AqiCategory::Moderate
        } else if score <= 150.0 {
            AqiCategory::UnhealthySensitive
        } else if score <= 200.0 {
            AqiCategory::Unhealthy
        } else if score <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Nominal score range for this category.
    pub const fn bounds(&self) -> (u16, u16) {
        match self {
            AqiCategory::Good => (0, 50),
            AqiCategory::Moderate => (51, 100),
            AqiCategory::UnhealthySensitive => (101, 150),
            AqiCategory::Unhealthy => (151, 200),
            AqiCategory::VeryUnhealthy => (201, 300),
            AqiCategory::Hazardous => (301, 500),
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// One-line guidance shown next to the label.
    pub const fn description(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory and poses little or no risk",
            AqiCategory::Moderate => "Acceptable; some pollutants may affect unusually sensitive people",
            AqiCategory::UnhealthySensitive => "Members of sensitive groups may experience health effects",
            AqiCategory::Unhealthy => "Everyone may begin to experience health effects",
            AqiCategory::VeryUnhealthy => "Health alert: everyone may experience more serious health effects",
            AqiCategory::Hazardous => "Health warning of emergency conditions; the entire population is affected",
        }
    }

    /// EPA display color.
    pub const fn color(&self) -> Color {
        match self {
            AqiCategory::Good => Color::Green,
            AqiCategory::Moderate => Color::Yellow,
            AqiCategory::UnhealthySensitive => Color::Orange,
            AqiCategory::Unhealthy => Color::Red,
            AqiCategory::VeryUnhealthy => Color::Purple,
            AqiCategory::Hazardous => Color::Maroon,
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
