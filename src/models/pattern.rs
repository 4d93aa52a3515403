//! Pattern definition model and related types.
//!
//! This module defines the [`PatternDefinition`] type describing a recurring
//! schedule, either as a weekly template (fixed weekdays) or as an N-day
//! rotating cycle anchored to a calendar date.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A day of the week, used for weekly pattern templates and day-of-week
/// rate rules.
///
/// This is a serializable mirror of [`chrono::Weekday`] so that weekday sets
/// round-trip through JSON and YAML as readable snake_case names.
///
/// # Example
///
/// ```
/// use roster_engine::models::DayOfWeek;
///
/// let json = serde_json::to_string(&DayOfWeek::Monday).unwrap();
/// assert_eq!(json, "\"monday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// One slot in a rotating pattern's cycle.
///
/// A rotation day is either a work day or an off day. Work days may carry
/// their own label and timing, overriding the pattern-level defaults; off
/// days produce no shift instances. The slot's position in the cycle is its
/// index in the pattern's rotation sequence.
///
/// # Example
///
/// ```
/// use roster_engine::models::RotationDay;
///
/// // A work day that starts at 19:00 instead of the pattern default.
/// let night = RotationDay {
///     is_work_day: true,
///     label: Some("Night".to_string()),
///     start_minute_of_day: Some(1140),
///     duration_minutes: None,
/// };
/// assert!(night.is_work_day);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationDay {
    /// Whether this slot is a work day (true) or an off day (false).
    pub is_work_day: bool,
    /// Optional label for shifts generated from this slot (e.g., "Night").
    #[serde(default)]
    pub label: Option<String>,
    /// Optional per-day override of the shift start offset within the day.
    #[serde(default)]
    pub start_minute_of_day: Option<u16>,
    /// Optional per-day override of the shift length in minutes.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl RotationDay {
    /// Creates a plain work day slot with no overrides.
    pub fn work() -> Self {
        Self {
            is_work_day: true,
            label: None,
            start_minute_of_day: None,
            duration_minutes: None,
        }
    }

    /// Creates an off day slot.
    pub fn off() -> Self {
        Self {
            is_work_day: false,
            label: None,
            start_minute_of_day: None,
            duration_minutes: None,
        }
    }
}

/// The recurrence variant of a pattern definition.
///
/// Exactly one variant applies to a definition; the enum makes it impossible
/// to consult the wrong variant's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSchedule {
    /// Shifts recur on a fixed set of weekdays every week.
    Weekly {
        /// The weekdays on which a shift occurs. Non-empty.
        weekdays: BTreeSet<DayOfWeek>,
    },
    /// Shifts follow a repeating N-day cycle anchored to a calendar date.
    Rotating {
        /// The ordered cycle slots. Length >= 2; position is the slot index.
        rotation_days: Vec<RotationDay>,
        /// The calendar date at which `rotation_days[0]` applies.
        cycle_start_date: NaiveDate,
    },
}

/// An immutable description of a recurring schedule.
///
/// A pattern definition is validated once at construction; expansion over
/// any date window is then infallible. Definitions are value types: changing
/// a definition never retroactively alters instances already generated from
/// it.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use roster_engine::models::{DayOfWeek, PatternDefinition, PatternSchedule};
/// use uuid::Uuid;
///
/// let definition = PatternDefinition::new(
///     Uuid::new_v4(),
///     "Ward rounds".to_string(),
///     540, // 09:00
///     480, // 8 hours
///     PatternSchedule::Weekly {
///         weekdays: BTreeSet::from([DayOfWeek::Monday, DayOfWeek::Wednesday]),
///     },
/// )
/// .unwrap();
/// assert_eq!(definition.start_minute_of_day(), 540);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternDefinition {
    /// Opaque pattern identifier stamped onto generated instances.
    id: Uuid,
    /// Display name, used as the default title of generated shifts.
    name: String,
    /// Shift start offset within a day, in minutes. In [0, 1440).
    start_minute_of_day: u16,
    /// Shift length in minutes. In [1, 1440].
    duration_minutes: u32,
    /// The recurrence variant.
    schedule: PatternSchedule,
}

impl PatternDefinition {
    /// Creates a validated pattern definition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] when:
    /// - `start_minute_of_day` is not in [0, 1440)
    /// - `duration_minutes` is not in [1, 1440]
    /// - a weekly schedule has an empty weekday set
    /// - a rotating schedule has fewer than 2 rotation days
    /// - a rotation day's timing override violates the bounds above
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use roster_engine::models::{PatternDefinition, PatternSchedule};
    /// use uuid::Uuid;
    ///
    /// let result = PatternDefinition::new(
    ///     Uuid::new_v4(),
    ///     "Empty".to_string(),
    ///     540,
    ///     480,
    ///     PatternSchedule::Weekly {
    ///         weekdays: BTreeSet::new(),
    ///     },
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        id: Uuid,
        name: String,
        start_minute_of_day: u16,
        duration_minutes: u32,
        schedule: PatternSchedule,
    ) -> EngineResult<Self> {
        validate_timing("start_minute_of_day", u32::from(start_minute_of_day))?;
        validate_duration("duration_minutes", duration_minutes)?;

        match &schedule {
            PatternSchedule::Weekly { weekdays } => {
                if weekdays.is_empty() {
                    return Err(EngineError::InvalidPattern {
                        field: "weekdays".to_string(),
                        message: "weekly pattern requires at least one weekday".to_string(),
                    });
                }
            }
            PatternSchedule::Rotating { rotation_days, .. } => {
                if rotation_days.len() < 2 {
                    return Err(EngineError::InvalidPattern {
                        field: "rotation_days".to_string(),
                        message: format!(
                            "rotating pattern requires at least 2 rotation days, got {}",
                            rotation_days.len()
                        ),
                    });
                }
                for (index, day) in rotation_days.iter().enumerate() {
                    if let Some(start) = day.start_minute_of_day {
                        validate_timing(
                            &format!("rotation_days[{}].start_minute_of_day", index),
                            u32::from(start),
                        )?;
                    }
                    if let Some(duration) = day.duration_minutes {
                        validate_duration(
                            &format!("rotation_days[{}].duration_minutes", index),
                            duration,
                        )?;
                    }
                }
            }
        }

        Ok(Self {
            id,
            name,
            start_minute_of_day,
            duration_minutes,
            schedule,
        })
    }

    /// Returns the opaque pattern identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the pattern's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default shift start offset within a day, in minutes.
    pub fn start_minute_of_day(&self) -> u16 {
        self.start_minute_of_day
    }

    /// Returns the default shift length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the recurrence variant.
    pub fn schedule(&self) -> &PatternSchedule {
        &self.schedule
    }
}

fn validate_timing(field: &str, start_minute: u32) -> EngineResult<()> {
    if start_minute >= MINUTES_PER_DAY {
        return Err(EngineError::InvalidPattern {
            field: field.to_string(),
            message: format!(
                "start minute must be below {}, got {}",
                MINUTES_PER_DAY, start_minute
            ),
        });
    }
    Ok(())
}

fn validate_duration(field: &str, duration_minutes: u32) -> EngineResult<()> {
    if duration_minutes == 0 || duration_minutes > MINUTES_PER_DAY {
        return Err(EngineError::InvalidPattern {
            field: field.to_string(),
            message: format!(
                "duration must be between 1 and {} minutes, got {}",
                MINUTES_PER_DAY, duration_minutes
            ),
        });
    }
    Ok(())
}
