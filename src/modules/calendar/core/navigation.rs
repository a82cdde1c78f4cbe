// Previous/next navigation and the header title for each view.
//
// Steps: Day moves one day, Week seven days, Month one month, Quarter three months,
// Year twelve months. Month arithmetic clamps to the last valid day (Jan 31 + 1 month
// lands on the last day of February).

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::resolver::{quarter_of, week_bounds};
use crate::modules::calendar::core::view_mode::ViewMode;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

enum Step {
    Days(u64),
    Months(u32),
}

fn step_of(view_mode: ViewMode) -> Step {
    match view_mode {
        ViewMode::Day => Step::Days(1),
        ViewMode::Week => Step::Days(7),
        ViewMode::Month | ViewMode::MonthDetailed => Step::Months(1),
        ViewMode::Quarter | ViewMode::QuarterDetailed => Step::Months(3),
        ViewMode::Year => Step::Months(12),
    }
}

pub fn navigate(
    view_mode: ViewMode,
    anchor: NaiveDate,
    direction: Direction,
) -> Result<NaiveDate, CalendarError> {
    let moved = match (step_of(view_mode), direction) {
        (Step::Days(days), Direction::Next) => anchor.checked_add_days(Days::new(days)),
        (Step::Days(days), Direction::Previous) => anchor.checked_sub_days(Days::new(days)),
        (Step::Months(months), Direction::Next) => anchor.checked_add_months(Months::new(months)),
        (Step::Months(months), Direction::Previous) => {
            anchor.checked_sub_months(Months::new(months))
        }
    };
    moved.ok_or(CalendarError::OutOfRange(anchor))
}

/// Header text shown above the grid, e.g. `May 2025` or `Q2 2025`.
pub fn range_title(view_mode: ViewMode, anchor: NaiveDate) -> Result<String, CalendarError> {
    let title = match view_mode {
        ViewMode::Day => anchor.format("%A, %B %-d, %Y").to_string(),
        ViewMode::Week => {
            let (first, last) = week_bounds(anchor)?;
            format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
        }
        ViewMode::Month | ViewMode::MonthDetailed => anchor.format("%B %Y").to_string(),
        ViewMode::Quarter | ViewMode::QuarterDetailed => {
            format!("Q{} {}", quarter_of(anchor), anchor.year())
        }
        ViewMode::Year => anchor.year().to_string(),
    };
    Ok(title)
}
