use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketUnit {
    Hour,
    Day,
    Month,
}

/// One rendered column or cell. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewBucket {
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ViewBucket {
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod view_bucket_tests {
    use super::*;
    use rstest::rstest;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[rstest]
    fn it_should_treat_the_end_as_exclusive() {
        let bucket = ViewBucket {
            label: "Mon 26".into(),
            start: at(26, 0),
            end: at(27, 0),
        };
        assert!(bucket.contains(at(26, 0)));
        assert!(bucket.contains(at(26, 23)));
        assert!(!bucket.contains(at(27, 0)));
        assert!(!bucket.contains(at(25, 23)));
        assert_eq!(bucket.day(), NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
    }
}
