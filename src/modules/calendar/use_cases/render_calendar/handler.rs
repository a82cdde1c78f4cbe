// Builds everything one render pass of the calendar needs.
//
// Purpose
// - Hand the UI a single consistent snapshot: buckets, layout directives, header
//   title, neighbouring anchors and the roster to draw rows for.
//
// Responsibilities
// - Read groups, resources and shifts from the store ports once per call.
// - Run the pure resolver and layout engine over that snapshot.
// - Report only the shifts that start inside the resolved range.

use crate::modules::calendar::core::bucket::{BucketUnit, ViewBucket};
use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::layout::{EventLayout, layout_entries};
use crate::modules::calendar::core::navigation::{Direction, navigate, range_title};
use crate::modules::calendar::core::resolver::resolve_view_range;
use crate::modules::calendar::core::view_mode::{LayoutStyle, ViewMode};
use crate::modules::calendar::use_cases::render_calendar::query::RenderCalendar;
use crate::modules::roster::use_cases::list_roster::projection::{GroupView, ResourceView};
use crate::modules::roster::use_cases::list_roster::queries_port::RosterQueries;
use crate::modules::shifts::use_cases::list_shifts::projection::ShiftView;
use crate::modules::shifts::use_cases::list_shifts::queries_port::ShiftQueries;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarSnapshot {
    pub view_mode: ViewMode,
    pub layout_style: LayoutStyle,
    pub bucket_unit: BucketUnit,
    pub anchor: NaiveDate,
    pub title: String,
    pub previous_anchor: Option<NaiveDate>,
    pub next_anchor: Option<NaiveDate>,
    pub buckets: Vec<ViewBucket>,
    pub layout: EventLayout,
    pub groups: Vec<GroupView>,
    pub resources: Vec<ResourceView>,
    pub shifts: Vec<ShiftView>,
}

pub struct RenderCalendarHandler {
    shifts: Arc<dyn ShiftQueries + Send + Sync>,
    roster: Arc<dyn RosterQueries + Send + Sync>,
}

impl RenderCalendarHandler {
    pub fn new(
        shifts: Arc<dyn ShiftQueries + Send + Sync>,
        roster: Arc<dyn RosterQueries + Send + Sync>,
    ) -> Self {
        Self { shifts, roster }
    }

    pub async fn handle(&self, query: RenderCalendar) -> Result<CalendarSnapshot, RenderError> {
        let RenderCalendar { view_mode, anchor } = query;
        let buckets = resolve_view_range(view_mode, anchor)?;
        let title = range_title(view_mode, anchor)?;

        let groups = self.roster.list_groups().await?;
        let resources = self.roster.list_resources().await?;
        let shifts = visible_shifts(&buckets, self.shifts.list_shifts().await?);

        let layout = layout_entries(&buckets, &shifts, view_mode);
        tracing::debug!(
            view_mode = %view_mode,
            %anchor,
            buckets = buckets.len(),
            shifts = shifts.len(),
            "calendar rendered"
        );

        Ok(CalendarSnapshot {
            view_mode,
            layout_style: view_mode.layout_style(),
            bucket_unit: view_mode.bucket_unit(),
            anchor,
            title,
            previous_anchor: navigate(view_mode, anchor, Direction::Previous).ok(),
            next_anchor: navigate(view_mode, anchor, Direction::Next).ok(),
            buckets,
            layout,
            groups,
            resources,
            shifts,
        })
    }
}

fn visible_shifts(buckets: &[ViewBucket], shifts: Vec<ShiftView>) -> Vec<ShiftView> {
    let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
        return Vec::new();
    };
    shifts
        .into_iter()
        .filter(|shift| first.start <= shift.start && shift.start < last.end)
        .collect()
}
