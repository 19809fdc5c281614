// Core data model for the timetable extraction pipeline.

use serde::Serialize;

/// First column of the Monday block. Weekday blocks repeat every
/// `DAY_STRIDE` columns after this one (Mon: 3, Tue: 10, ..., Fri: 31).
pub const DAY_START_COL: usize = 3;

/// Width of one weekday block in columns. The last block of a row may be
/// truncated to 6 available columns.
pub const DAY_STRIDE: usize = 7;

/// Teaching days covered by the timetable grid, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position within the fixed weekday order (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// First grid column of this weekday's block.
    pub fn start_col(self) -> usize {
        DAY_START_COL + self.index() * DAY_STRIDE
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// One lecture occurrence extracted from a data row. `batch`, `faculty` and
/// `kind` gate validity during extraction and are dropped by the aggregator.
#[derive(Debug, Clone, Serialize)]
pub struct LectureRecord {
    pub subject_code: String,
    pub subject_name: String,
    pub day: Weekday,
    /// Raw time label inherited from the nearest time-header row above,
    /// e.g. "8:00 - 8:50". Not validated here.
    pub time: String,
    pub batch: String,
    pub room: String,
    pub faculty: String,
    /// Lecture type column (Core/Elective).
    pub kind: String,
}

/// Deduplicated (day, time, room) occurrence in the final mapping. Field
/// names match the JSON contract consumed by the SQL generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    #[serde(rename = "Day")]
    pub day: Weekday,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Room")]
    pub room: String,
}
