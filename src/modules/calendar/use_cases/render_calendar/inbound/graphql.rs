use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{Local, NaiveDate};

use crate::modules::calendar::core::bucket::ViewBucket;
use crate::modules::calendar::core::layout::{
    BucketCount, BucketStack, EventLayout, StackEntry, TimelinePlacement,
};
use crate::modules::calendar::core::view_mode::ViewMode;
use crate::modules::calendar::use_cases::render_calendar::handler::CalendarSnapshot;
use crate::modules::calendar::use_cases::render_calendar::query::RenderCalendar;
use crate::modules::roster::use_cases::list_roster::inbound::graphql::{GqlGroup, GqlResource};
use crate::modules::shifts::use_cases::list_shifts::inbound::graphql::GqlShift;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlBucket {
    pub label: String,
    pub start: String,
    pub end: String,
}

impl From<ViewBucket> for GqlBucket {
    fn from(b: ViewBucket) -> Self {
        Self {
            label: b.label,
            start: b.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: b.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimelinePlacement {
    pub shift_id: String,
    pub resource_id: String,
    pub bucket_index: i32,
    pub left_fraction: f64,
    pub width_fraction: f64,
    pub lane: i32,
    pub lane_count: i32,
}

impl From<TimelinePlacement> for GqlTimelinePlacement {
    fn from(p: TimelinePlacement) -> Self {
        Self {
            shift_id: p.entry_id,
            resource_id: p.resource_id,
            bucket_index: p.bucket_index as i32,
            left_fraction: p.left_fraction,
            width_fraction: p.width_fraction,
            lane: p.lane as i32,
            lane_count: p.lane_count as i32,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStackEntry {
    pub shift_id: String,
    pub resource_id: String,
    pub stack_index: i32,
}

impl From<StackEntry> for GqlStackEntry {
    fn from(e: StackEntry) -> Self {
        Self {
            shift_id: e.entry_id,
            resource_id: e.resource_id,
            stack_index: e.stack_index as i32,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBucketStack {
    pub bucket_index: i32,
    pub entries: Vec<GqlStackEntry>,
}

impl From<BucketStack> for GqlBucketStack {
    fn from(s: BucketStack) -> Self {
        Self {
            bucket_index: s.bucket_index as i32,
            entries: s.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBucketCount {
    pub bucket_index: i32,
    pub count: i32,
}

impl From<BucketCount> for GqlBucketCount {
    fn from(c: BucketCount) -> Self {
        Self {
            bucket_index: c.bucket_index as i32,
            count: c.count as i32,
        }
    }
}

/// Only the list matching `layout_style` is filled.
#[derive(SimpleObject, Clone)]
pub struct GqlCalendar {
    pub view_mode: String,
    pub layout_style: String,
    pub anchor: String,
    pub title: String,
    pub previous_anchor: Option<String>,
    pub next_anchor: Option<String>,
    pub buckets: Vec<GqlBucket>,
    pub timeline: Vec<GqlTimelinePlacement>,
    pub stacks: Vec<GqlBucketStack>,
    pub counts: Vec<GqlBucketCount>,
    pub groups: Vec<GqlGroup>,
    pub resources: Vec<GqlResource>,
    pub shifts: Vec<GqlShift>,
}

impl From<CalendarSnapshot> for GqlCalendar {
    fn from(s: CalendarSnapshot) -> Self {
        let (layout_style, timeline, stacks, counts) = match s.layout {
            EventLayout::Timeline(items) => (
                "timeline",
                items.into_iter().map(Into::into).collect(),
                Vec::new(),
                Vec::new(),
            ),
            EventLayout::Stacked(items) => (
                "stacked",
                Vec::new(),
                items.into_iter().map(Into::into).collect(),
                Vec::new(),
            ),
            EventLayout::Summary(items) => (
                "summary",
                Vec::new(),
                Vec::new(),
                items.into_iter().map(Into::into).collect(),
            ),
        };
        Self {
            view_mode: s.view_mode.to_string(),
            layout_style: layout_style.to_string(),
            anchor: s.anchor.to_string(),
            title: s.title,
            previous_anchor: s.previous_anchor.map(|d| d.to_string()),
            next_anchor: s.next_anchor.map(|d| d.to_string()),
            buckets: s.buckets.into_iter().map(Into::into).collect(),
            timeline,
            stacks,
            counts,
            groups: s.groups.into_iter().map(Into::into).collect(),
            resources: s.resources.into_iter().map(Into::into).collect(),
            shifts: s.shifts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct RenderCalendarQuery;

#[Object]
impl RenderCalendarQuery {
    /// `view` defaults to `week`, `date` (YYYY-MM-DD) to today.
    async fn calendar(
        &self,
        context: &Context<'_>,
        view: Option<String>,
        date: Option<String>,
    ) -> GqlResult<GqlCalendar> {
        let state = context.data_unchecked::<AppState>();
        let view_mode = match view {
            Some(raw) => raw.parse::<ViewMode>()?,
            None => ViewMode::Week,
        };
        let anchor = match date {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| async_graphql::Error::new(format!("invalid date: {raw}")))?,
            None => Local::now().date_naive(),
        };
        let snapshot = state
            .render_calendar_handler
            .handle(RenderCalendar { view_mode, anchor })
            .await?;
        Ok(snapshot.into())
    }
}
