use crate::modules::calendar::core::layout::EventLayout;
use crate::modules::calendar::core::navigation::{Direction, navigate};
use crate::modules::calendar::core::view_mode::ViewMode;
use crate::modules::calendar::use_cases::render_calendar::query::RenderCalendar;
use crate::modules::shifts::core::events::shift_stream_id;
use crate::tests::fixtures::commands::schedule_shift::ScheduleShiftBuilder;
use crate::tests::fixtures::state::make_seeded_state;
use chrono::{Datelike, NaiveDate, Weekday};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn renders_a_scheduled_week_and_pages_forward() {
    let state = make_seeded_state().await;
    let shifts = [
        ("shift-mon-late", "2025-05-26T13:00", "2025-05-26T17:00"),
        ("shift-mon-early", "2025-05-26T09:00", "2025-05-26T13:00"),
        ("shift-mon-tie", "2025-05-26T09:00", "2025-05-26T11:00"),
        ("shift-next-week", "2025-06-03T09:00", "2025-06-03T17:00"),
    ];
    for (shift_id, start, end) in shifts {
        let command = ScheduleShiftBuilder::new()
            .shift_id(shift_id)
            .start(start)
            .end(end)
            .build();
        state
            .schedule_shift_handler
            .handle(&shift_stream_id(shift_id), command)
            .await
            .unwrap();
    }

    let anchor = date(2025, 5, 26);
    let week = state
        .render_calendar_handler
        .handle(RenderCalendar {
            view_mode: ViewMode::Week,
            anchor,
        })
        .await
        .unwrap();

    assert_eq!(week.buckets.len(), 7);
    assert_eq!(week.buckets[0].day().weekday(), Weekday::Sun);
    let EventLayout::Stacked(stacks) = week.layout else {
        panic!("week view should stack shifts");
    };
    let monday: Vec<&str> = stacks[1]
        .entries
        .iter()
        .map(|e| e.entry_id.as_str())
        .collect();
    assert_eq!(monday, vec!["shift-mon-early", "shift-mon-tie", "shift-mon-late"]);
    assert!(stacks.iter().all(|s| s.bucket_index == 1 || s.entries.is_empty()));

    let next_anchor = navigate(ViewMode::Week, anchor, Direction::Next).unwrap();
    assert_eq!(Some(next_anchor), week.next_anchor);
    let next_week = state
        .render_calendar_handler
        .handle(RenderCalendar {
            view_mode: ViewMode::Week,
            anchor: next_anchor,
        })
        .await
        .unwrap();
    assert_eq!(next_week.shifts.len(), 1);
    assert_eq!(next_week.shifts[0].shift_id, "shift-next-week");
}

#[tokio::test]
async fn renders_the_day_timeline_within_bounds() {
    let state = make_seeded_state().await;
    let command = ScheduleShiftBuilder::new()
        .shift_id("shift-evening")
        .start("2025-05-26T18:00")
        .end("2025-05-27T02:00")
        .build();
    state
        .schedule_shift_handler
        .handle(&shift_stream_id("shift-evening"), command)
        .await
        .unwrap();

    let day = state
        .render_calendar_handler
        .handle(RenderCalendar {
            view_mode: ViewMode::Day,
            anchor: date(2025, 5, 26),
        })
        .await
        .unwrap();

    let EventLayout::Timeline(placements) = day.layout else {
        panic!("day view should place shifts on a timeline");
    };
    assert_eq!(placements.len(), 1);
    let placement = &placements[0];
    assert_eq!(placement.bucket_index, 18);
    assert!((placement.left_fraction - 0.75).abs() < 1e-9);
    assert!(placement.left_fraction + placement.width_fraction <= 1.0 + 1e-9);
    assert_eq!((placement.lane, placement.lane_count), (0, 1));

    let following_day = state
        .render_calendar_handler
        .handle(RenderCalendar {
            view_mode: ViewMode::Day,
            anchor: date(2025, 5, 27),
        })
        .await
        .unwrap();
    assert_eq!(following_day.layout, EventLayout::Timeline(Vec::new()));
}

#[tokio::test]
async fn summarises_the_year_by_month() {
    let state = make_seeded_state().await;
    for (shift_id, start, end) in [
        ("jan", "2025-01-15T09:00", "2025-01-15T17:00"),
        ("may-a", "2025-05-01T09:00", "2025-05-01T17:00"),
        ("may-b", "2025-05-31 22:00", "2025-05-31 23:30"),
    ] {
        let command = ScheduleShiftBuilder::new()
            .shift_id(shift_id)
            .start(start)
            .end(end)
            .build();
        state
            .schedule_shift_handler
            .handle(&shift_stream_id(shift_id), command)
            .await
            .unwrap();
    }

    let year = state
        .render_calendar_handler
        .handle(RenderCalendar {
            view_mode: ViewMode::Year,
            anchor: date(2025, 8, 1),
        })
        .await
        .unwrap();

    assert_eq!(year.title, "2025");
    let EventLayout::Summary(counts) = year.layout else {
        panic!("year view should summarise");
    };
    let per_month: Vec<usize> = counts.iter().map(|c| c.count).collect();
    assert_eq!(per_month, vec![1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0]);
}
