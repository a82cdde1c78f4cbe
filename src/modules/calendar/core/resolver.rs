// Maps a (view mode, anchor date) pair to the ordered buckets the calendar draws.
//
// Rules
// - Day: 24 hourly buckets of the anchor date.
// - Week: 7 days from the Sunday on or before the anchor.
// - Month and Quarter (plain and detailed): every day from the Sunday on or before the
//   first day of the period to the Saturday on or after its last day, so the grid is
//   always made of complete weeks.
// - Year: one bucket per calendar month.
//
// The result is fully materialised and depends only on the inputs.

use crate::modules::calendar::core::bucket::ViewBucket;
use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::view_mode::ViewMode;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const HOUR_LABEL: &str = "%-I%P";
const WEEK_DAY_LABEL: &str = "%a %-d";
const GRID_DAY_LABEL: &str = "%-d";
const MONTH_LABEL: &str = "%b";

pub fn resolve_view_range(
    view_mode: ViewMode,
    anchor: NaiveDate,
) -> Result<Vec<ViewBucket>, CalendarError> {
    match view_mode {
        ViewMode::Day => hour_buckets(anchor),
        ViewMode::Week => {
            let (first, last) = week_bounds(anchor)?;
            day_buckets(first, last, WEEK_DAY_LABEL)
        }
        ViewMode::Month | ViewMode::MonthDetailed => {
            let (first, last) = month_bounds(anchor)?;
            padded_grid(first, last)
        }
        ViewMode::Quarter | ViewMode::QuarterDetailed => {
            let (first, last) = quarter_bounds(anchor)?;
            padded_grid(first, last)
        }
        ViewMode::Year => month_buckets(anchor),
    }
}

/// Sunday on or before `date` and the Saturday that closes that week.
pub fn week_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let first = date
        .checked_sub_days(Days::new(offset))
        .ok_or(CalendarError::OutOfRange(date))?;
    let last = first
        .checked_add_days(Days::new(6))
        .ok_or(CalendarError::OutOfRange(date))?;
    Ok((first, last))
}

pub fn month_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let first = first_of_month(date.year(), date.month(), date)?;
    let last = last_day_after(first, 1, date)?;
    Ok((first, last))
}

pub fn quarter_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let first_month = (date.month0() / 3) * 3 + 1;
    let first = first_of_month(date.year(), first_month, date)?;
    let last = last_day_after(first, 3, date)?;
    Ok((first, last))
}

/// 1-based quarter number of `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

fn first_of_month(year: i32, month: u32, anchor: NaiveDate) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::OutOfRange(anchor))
}

fn last_day_after(first: NaiveDate, months: u32, anchor: NaiveDate) -> Result<NaiveDate, CalendarError> {
    first
        .checked_add_months(Months::new(months))
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::OutOfRange(anchor))
}

fn padded_grid(first: NaiveDate, last: NaiveDate) -> Result<Vec<ViewBucket>, CalendarError> {
    let (grid_start, _) = week_bounds(first)?;
    let (_, grid_end) = week_bounds(last)?;
    day_buckets(grid_start, grid_end, GRID_DAY_LABEL)
}

fn day_buckets(
    first: NaiveDate,
    last: NaiveDate,
    label_format: &str,
) -> Result<Vec<ViewBucket>, CalendarError> {
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| {
            let start = day.and_time(NaiveTime::MIN);
            Ok(ViewBucket {
                label: day.format(label_format).to_string(),
                start,
                end: shifted(start, TimeDelta::days(1), day)?,
            })
        })
        .collect()
}

fn hour_buckets(anchor: NaiveDate) -> Result<Vec<ViewBucket>, CalendarError> {
    let midnight = anchor.and_time(NaiveTime::MIN);
    (0..24)
        .map(|hour| {
            let start = shifted(midnight, TimeDelta::hours(hour), anchor)?;
            Ok(ViewBucket {
                label: start.format(HOUR_LABEL).to_string(),
                start,
                end: shifted(start, TimeDelta::hours(1), anchor)?,
            })
        })
        .collect()
}

fn month_buckets(anchor: NaiveDate) -> Result<Vec<ViewBucket>, CalendarError> {
    (1..=12)
        .map(|month| {
            let first = first_of_month(anchor.year(), month, anchor)?;
            let next = first
                .checked_add_months(Months::new(1))
                .ok_or(CalendarError::OutOfRange(anchor))?;
            Ok(ViewBucket {
                label: first.format(MONTH_LABEL).to_string(),
                start: first.and_time(NaiveTime::MIN),
                end: next.and_time(NaiveTime::MIN),
            })
        })
        .collect()
}

fn shifted(
    start: NaiveDateTime,
    delta: TimeDelta,
    anchor: NaiveDate,
) -> Result<NaiveDateTime, CalendarError> {
    start
        .checked_add_signed(delta)
        .ok_or(CalendarError::OutOfRange(anchor))
}
