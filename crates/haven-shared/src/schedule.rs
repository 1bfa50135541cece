//! Therapist weekly availability.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One bookable window on a given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub weekday: Weekday,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl ScheduleSlot {
    pub fn new(weekday: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self { weekday, start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub therapist_id: String,
    pub timezone: String,
    #[serde(default)]
    pub slots: Vec<ScheduleSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleShapeError {
    #[error("therapist id is empty")]
    MissingTherapist,

    #[error("slot {index} has a time finer than a minute")]
    SubMinute { index: usize },

    #[error("slot {index} ends at or before it starts")]
    EmptySlot { index: usize },
}

impl WeeklySchedule {
    /// Structural checks needed before sending the schedule: an addressable
    /// therapist and slots that survive the minute-resolution wire format
    /// with start before end.
    pub fn validate_shape(&self) -> Result<(), ScheduleShapeError> {
        if self.therapist_id.trim().is_empty() {
            return Err(ScheduleShapeError::MissingTherapist);
        }

        for (index, slot) in self.slots.iter().enumerate() {
            if !on_minute(slot.start) || !on_minute(slot.end) {
                return Err(ScheduleShapeError::SubMinute { index });
            }
            if slot.end <= slot.start {
                return Err(ScheduleShapeError::EmptySlot { index });
            }
        }

        Ok(())
    }

    /// Slots grouped Monday-first, each day sorted by start time.
    pub fn by_day(&self) -> Vec<(Weekday, Vec<ScheduleSlot>)> {
        std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ()))
            .take(7)
            .filter_map(|weekday| {
                let mut slots: Vec<ScheduleSlot> = self
                    .slots
                    .iter()
                    .filter(|s| s.weekday == weekday)
                    .copied()
                    .collect();
                if slots.is_empty() {
                    return None;
                }
                slots.sort_by_key(|s| s.start);
                Some((weekday, slots))
            })
            .collect()
    }
}

fn on_minute(time: NaiveTime) -> bool {
    time.second() == 0 && time.nanosecond() == 0
}

/// Times travel as "HH:MM"; "HH:MM:SS" is accepted on the way in.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, FORMAT_WITH_SECONDS))
            .map_err(serde::de::Error::custom)
    }
}
