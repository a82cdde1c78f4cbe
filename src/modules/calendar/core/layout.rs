// Projects shifts onto resolved buckets.
//
// Membership
// - A shift belongs to the day its start falls on. A shift crossing midnight is drawn
//   on its start day only.
//
// Styles
// - Timeline (Day view): fractional offset and width along the 1440 minutes of the day.
//   Shifts of one resource that overlap share a cluster and get separate lanes; the
//   lowest free lane is taken, and every member of a cluster reports its lane count.
// - Stacked (Week and detailed grids): per bucket, shifts ordered by start with input
//   order breaking ties. The stack index counts within one resource's row.
// - Summary (Month, Quarter, Year): a count of shifts starting inside each bucket.
//
// Degenerate shifts (zero or negative duration) are clamped to a minimum width, never
// rejected here.

use crate::modules::calendar::core::bucket::ViewBucket;
use crate::modules::calendar::core::view_mode::{LayoutStyle, ViewMode};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::collections::HashMap;

pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const MIN_WIDTH_FRACTION: f64 = 15.0 / MINUTES_PER_DAY;

const SECONDS_PER_DAY: i64 = 86_400;
const MIN_SPAN_SECONDS: i64 = 15 * 60;

/// Anything that occupies a span of wall-clock time on a resource's row.
pub trait TimedEntry {
    fn entry_id(&self) -> &str;
    fn resource_id(&self) -> &str;
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePlacement {
    pub entry_id: String,
    pub resource_id: String,
    pub bucket_index: usize,
    pub left_fraction: f64,
    pub width_fraction: f64,
    /// Zero-based sub-row inside the resource's row.
    pub lane: usize,
    pub lane_count: usize,
}

/// Seconds since midnight covered by a placement, after clamping.
#[derive(Debug, Clone, Copy)]
struct DaySpan {
    from: i64,
    to: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackEntry {
    pub entry_id: String,
    pub resource_id: String,
    pub stack_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketStack {
    pub bucket_index: usize,
    pub entries: Vec<StackEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub bucket_index: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "style", content = "items", rename_all = "snake_case")]
pub enum EventLayout {
    Timeline(Vec<TimelinePlacement>),
    Stacked(Vec<BucketStack>),
    Summary(Vec<BucketCount>),
}

pub fn layout_entries<E: TimedEntry>(
    buckets: &[ViewBucket],
    entries: &[E],
    view_mode: ViewMode,
) -> EventLayout {
    match view_mode.layout_style() {
        LayoutStyle::Timeline => EventLayout::Timeline(timeline(buckets, entries)),
        LayoutStyle::Stacked => EventLayout::Stacked(stacked(buckets, entries)),
        LayoutStyle::Summary => EventLayout::Summary(summary(buckets, entries)),
    }
}

fn by_start<E: TimedEntry>(entries: &[E]) -> Vec<&E> {
    let mut ordered: Vec<&E> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.start());
    ordered
}

fn timeline<E: TimedEntry>(buckets: &[ViewBucket], entries: &[E]) -> Vec<TimelinePlacement> {
    let Some(first) = buckets.first() else {
        return Vec::new();
    };
    let day = first.day();
    let mut placed: Vec<(TimelinePlacement, DaySpan)> = by_start(entries)
        .into_iter()
        .filter(|entry| entry.start().date() == day)
        .map(place_on_day)
        .collect();
    assign_lanes(&mut placed);
    placed.into_iter().map(|(placement, _)| placement).collect()
}

fn place_on_day<E: TimedEntry>(entry: &E) -> (TimelinePlacement, DaySpan) {
    let start = entry.start();
    let from = i64::from(start.num_seconds_from_midnight());
    let duration = (entry.end() - start).num_seconds();
    let to = (from + duration.max(MIN_SPAN_SECONDS)).min(SECONDS_PER_DAY);
    let day_seconds = SECONDS_PER_DAY as f64;

    let placement = TimelinePlacement {
        entry_id: entry.entry_id().to_string(),
        resource_id: entry.resource_id().to_string(),
        bucket_index: start.hour() as usize,
        left_fraction: from as f64 / day_seconds,
        width_fraction: (to - from) as f64 / day_seconds,
        lane: 0,
        lane_count: 1,
    };
    (placement, DaySpan { from, to })
}

// Expects `placed` in start order.
fn assign_lanes(placed: &mut [(TimelinePlacement, DaySpan)]) {
    let mut rows: Vec<(String, Vec<usize>)> = Vec::new();
    for (index, (placement, _)) in placed.iter().enumerate() {
        match rows.iter_mut().find(|(id, _)| *id == placement.resource_id) {
            Some((_, members)) => members.push(index),
            None => rows.push((placement.resource_id.clone(), vec![index])),
        }
    }

    for (_, members) in rows {
        let mut lane_ends: Vec<i64> = Vec::new();
        let mut cluster: Vec<usize> = Vec::new();
        let mut cluster_end = 0;
        for index in members {
            let span = placed[index].1;
            if !cluster.is_empty() && span.from >= cluster_end {
                close_cluster(placed, &mut cluster, lane_ends.len());
                lane_ends.clear();
            }
            let lane = match lane_ends.iter().position(|end| *end <= span.from) {
                Some(lane) => {
                    lane_ends[lane] = span.to;
                    lane
                }
                None => {
                    lane_ends.push(span.to);
                    lane_ends.len() - 1
                }
            };
            placed[index].0.lane = lane;
            cluster_end = cluster_end.max(span.to);
            cluster.push(index);
        }
        close_cluster(placed, &mut cluster, lane_ends.len());
    }
}

fn close_cluster(
    placed: &mut [(TimelinePlacement, DaySpan)],
    cluster: &mut Vec<usize>,
    lane_count: usize,
) {
    for index in cluster.drain(..) {
        placed[index].0.lane_count = lane_count;
    }
}

fn stacked<E: TimedEntry>(buckets: &[ViewBucket], entries: &[E]) -> Vec<BucketStack> {
    let ordered = by_start(entries);
    buckets
        .iter()
        .enumerate()
        .map(|(bucket_index, bucket)| {
            let day = bucket.day();
            let mut row_heights: HashMap<String, usize> = HashMap::new();
            let entries = ordered
                .iter()
                .filter(|entry| entry.start().date() == day)
                .map(|entry| {
                    let height = row_heights
                        .entry(entry.resource_id().to_string())
                        .or_default();
                    let stack_index = *height;
                    *height += 1;
                    StackEntry {
                        entry_id: entry.entry_id().to_string(),
                        resource_id: entry.resource_id().to_string(),
                        stack_index,
                    }
                })
                .collect();
            BucketStack {
                bucket_index,
                entries,
            }
        })
        .collect()
}

fn summary<E: TimedEntry>(buckets: &[ViewBucket], entries: &[E]) -> Vec<BucketCount> {
    buckets
        .iter()
        .enumerate()
        .map(|(bucket_index, bucket)| BucketCount {
            bucket_index,
            count: entries
                .iter()
                .filter(|entry| bucket.contains(entry.start()))
                .count(),
        })
        .collect()
}
