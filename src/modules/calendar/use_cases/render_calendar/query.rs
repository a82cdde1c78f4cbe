use crate::modules::calendar::core::view_mode::ViewMode;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCalendar {
    pub view_mode: ViewMode,
    pub anchor: NaiveDate,
}
