//! Module with baseline schedule models, compatible with the packaged `Assets` json files
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::days::{day_by_index, DAYS_IN_WEEK};

#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub number: u8,
    pub name: String,
    #[serde(default)]
    pub teacher_name: String,
    #[serde(default)]
    pub place: String,
}

#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Seven days of one group, Monday first.
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    pub group_name: String,
    pub days: Vec<DaySchedule>,
}

/* built once, handed out by clone */
static DEFAULT_DAY_SCHEDULES: LazyLock<Vec<DaySchedule>> = LazyLock::new(|| {
    (0..DAYS_IN_WEEK)
        .filter_map(day_by_index)
        .map(|day| DaySchedule::new(day, Vec::new()))
        .collect()
});

static DEFAULT_WEEK_SCHEDULE: LazyLock<WeekSchedule> =
    LazyLock::new(|| WeekSchedule::new(String::new(), DEFAULT_DAY_SCHEDULES.clone()));

impl DaySchedule {
    pub fn new(day: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            day: day.into(),
            lessons,
        }
    }

    /// Empty schedule returned whenever the real one can not be read.
    /// Out of range indices get Monday's.
    pub fn fallback(day_index: usize) -> Self {
        DEFAULT_DAY_SCHEDULES
            .get(day_index)
            .unwrap_or(&DEFAULT_DAY_SCHEDULES[0])
            .clone()
    }
}

impl WeekSchedule {
    pub fn new(group_name: impl Into<String>, days: Vec<DaySchedule>) -> Self {
        Self {
            group_name: group_name.into(),
            days,
        }
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        DEFAULT_WEEK_SCHEDULE.clone()
    }
}
