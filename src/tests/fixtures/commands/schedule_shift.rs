// Shared test fixture for the ScheduleShift command.

use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleShiftDto {
    pub shift_id: String,
    pub resource_id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
}

pub struct ScheduleShiftBuilder {
    inner: ScheduleShift,
}

impl Default for ScheduleShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleShiftBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/schedule_shift.json").unwrap();
        let dto: ScheduleShiftDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ScheduleShift {
                shift_id: dto.shift_id,
                resource_id: dto.resource_id,
                title: dto.title,
                start: dto.start,
                end: dto.end,
                color: dto.color,
                open_shift_group_id: dto.open_shift_group_id,
                created_at: 1_748_250_000_000,
            },
        }
    }

    pub fn shift_id(mut self, v: impl Into<String>) -> Self {
        self.inner.shift_id = v.into();
        self
    }

    pub fn resource_id(mut self, v: impl Into<String>) -> Self {
        self.inner.resource_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn start(mut self, v: impl Into<String>) -> Self {
        self.inner.start = v.into();
        self
    }

    pub fn end(mut self, v: impl Into<String>) -> Self {
        self.inner.end = v.into();
        self
    }

    pub fn color(mut self, v: Option<String>) -> Self {
        self.inner.color = v;
        self
    }

    pub fn open_shift_group_id(mut self, v: impl Into<String>) -> Self {
        self.inner.open_shift_group_id = Some(v.into());
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> ScheduleShift {
        self.inner
    }
}

#[cfg(test)]
mod schedule_shift_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ScheduleShiftBuilder::default().build();
        assert_eq!(built.shift_id, "shift-fixed-0001");
        assert_eq!(built.resource_id, "res-1");
        assert_eq!(built.title, "Morning Shift");
        assert_eq!(built.start, "2025-05-26T09:00");
        assert_eq!(built.end, "2025-05-26T13:00");
        assert_eq!(built.color.as_deref(), Some("#4caf50"));
        assert_eq!(built.open_shift_group_id, None);
        assert_eq!(built.created_at, 1_748_250_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ScheduleShiftBuilder::new()
            .shift_id("sid-123")
            .resource_id("open-shift-resource-id")
            .title("Cover")
            .start("2025-05-27 10:00")
            .end("2025-05-27 12:00")
            .color(None)
            .open_shift_group_id("group-sales")
            .created_at(3333)
            .build();

        assert_eq!(custom.shift_id, "sid-123");
        assert_eq!(custom.resource_id, "open-shift-resource-id");
        assert_eq!(custom.title, "Cover");
        assert_eq!(custom.start, "2025-05-27 10:00");
        assert_eq!(custom.end, "2025-05-27 12:00");
        assert_eq!(custom.color, None);
        assert_eq!(custom.open_shift_group_id.as_deref(), Some("group-sales"));
        assert_eq!(custom.created_at, 3333);
    }
}
