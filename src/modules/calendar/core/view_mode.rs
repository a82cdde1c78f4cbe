// View modes offered by the calendar and the layout style each one renders with.
//
// Wire names are kebab-case ("month-detailed"). Snake-case spellings are accepted
// on input as well. Anything else is rejected instead of falling back to a default.

use crate::modules::calendar::core::bucket::BucketUnit;
use crate::modules::calendar::core::errors::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Day,
    Week,
    Month,
    MonthDetailed,
    Quarter,
    QuarterDetailed,
    Year,
}

/// How shifts are drawn inside the buckets of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Fractional offset and width along a single day.
    Timeline,
    /// Shifts stacked vertically inside each day bucket.
    Stacked,
    /// Only a count per bucket.
    Summary,
}

impl ViewMode {
    pub const ALL: [ViewMode; 7] = [
        ViewMode::Day,
        ViewMode::Week,
        ViewMode::Month,
        ViewMode::MonthDetailed,
        ViewMode::Quarter,
        ViewMode::QuarterDetailed,
        ViewMode::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::MonthDetailed => "month-detailed",
            ViewMode::Quarter => "quarter",
            ViewMode::QuarterDetailed => "quarter-detailed",
            ViewMode::Year => "year",
        }
    }

    pub fn layout_style(self) -> LayoutStyle {
        match self {
            ViewMode::Day => LayoutStyle::Timeline,
            ViewMode::Week | ViewMode::MonthDetailed | ViewMode::QuarterDetailed => {
                LayoutStyle::Stacked
            }
            ViewMode::Month | ViewMode::Quarter | ViewMode::Year => LayoutStyle::Summary,
        }
    }

    pub fn bucket_unit(self) -> BucketUnit {
        match self {
            ViewMode::Day => BucketUnit::Hour,
            ViewMode::Year => BucketUnit::Month,
            _ => BucketUnit::Day,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CalendarError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| CalendarError::UnknownViewMode(raw.to_string()))
    }
}
