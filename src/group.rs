use crate::class_type::{ClassType, UnknownClassType, parse_teaching_weekday};
use crate::group_fields::{self as fields, LayoutError};
use crate::student::{Student, StudentRef, by_happiness};
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupErrorKind {
    FieldCount,
    InvalidClassType,
    InvalidWeekday,
    InvalidTimeFormat,
    InvalidDateFormat,
    InvalidNumber,
}

/// Reason a raw row could not become a [`Group`]. Construction stops at the
/// first bad field, checked in the order of the variants below.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupError {
    FieldCount {
        found: usize,
    },
    InvalidClassType(UnknownClassType),
    InvalidWeekday(String),
    InvalidTimeFormat {
        field: &'static str,
        value: String,
        source: LayoutError,
    },
    InvalidDateFormat {
        value: String,
        source: LayoutError,
    },
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
}

impl GroupError {
    pub fn kind(&self) -> GroupErrorKind {
        match self {
            GroupError::FieldCount { .. } => GroupErrorKind::FieldCount,
            GroupError::InvalidClassType(_) => GroupErrorKind::InvalidClassType,
            GroupError::InvalidWeekday(_) => GroupErrorKind::InvalidWeekday,
            GroupError::InvalidTimeFormat { .. } => GroupErrorKind::InvalidTimeFormat,
            GroupError::InvalidDateFormat { .. } => GroupErrorKind::InvalidDateFormat,
            GroupError::InvalidNumber { .. } => GroupErrorKind::InvalidNumber,
        }
    }
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to create group: ")?;
        match self {
            GroupError::FieldCount { found } => {
                write!(f, "expected {} fields, found {found}", fields::FIELD_COUNT)
            }
            GroupError::InvalidClassType(err) => write!(f, "{err}"),
            GroupError::InvalidWeekday(value) => write!(
                f,
                "incorrect weekday {value:?}, available weekdays: Monday, Tuesday, Wednesday, Thursday, Friday"
            ),
            GroupError::InvalidTimeFormat {
                field,
                value,
                source,
            } => write!(f, "invalid {field} {value:?}: {source}"),
            GroupError::InvalidDateFormat { value, source } => {
                write!(f, "invalid start date {value:?}: {source}")
            }
            GroupError::InvalidNumber {
                field,
                value,
                source,
            } => write!(f, "invalid {field} {value:?}: {source}"),
        }
    }
}

impl std::error::Error for GroupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GroupError::FieldCount { .. } | GroupError::InvalidWeekday(_) => None,
            GroupError::InvalidClassType(err) => Some(err),
            GroupError::InvalidTimeFormat { source, .. }
            | GroupError::InvalidDateFormat { source, .. } => Some(source),
            GroupError::InvalidNumber { source, .. } => Some(source),
        }
    }
}

impl From<UnknownClassType> for GroupError {
    fn from(value: UnknownClassType) -> Self {
        Self::InvalidClassType(value)
    }
}

/// One subject's session in the timetable together with the students
/// assigned to it.
///
/// Identity and schedule fields are fixed at construction; afterwards only the
/// rosters change. Priority students are guaranteed a seat and never take part
/// in the happiness ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub class_type: ClassType,
    pub teacher: String,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub place: String,
    pub start_date: NaiveDate,
    pub frequency: i64,
    pub name: String,
    pub capacity: i64,
    pub students: Vec<StudentRef>,
    pub priority_students: Vec<StudentRef>,
    pub sub_groups: Vec<Group>,
}

impl Group {
    /// Builds a group from one raw timetable row.
    ///
    /// Columns: subject, type, teacher, weekday, start time (`HH:MM`),
    /// end time (`HH:MM`), place, start date (`DD-MM-YY`), frequency,
    /// group name, capacity. Columns past the eleventh are ignored.
    pub fn from_fields<S: AsRef<str>>(row: &[S]) -> Result<Self, GroupError> {
        let group = Self::parse_row(row);
        match &group {
            Ok(group) => tracing::debug!(
                group = %group.name,
                class_type = %group.class_type,
                weekday = %group.weekday,
                start = %group.start_time,
                "group created"
            ),
            Err(err) => tracing::debug!(error = %err, "group row rejected"),
        }
        group
    }

    fn parse_row<S: AsRef<str>>(row: &[S]) -> Result<Self, GroupError> {
        if row.len() < fields::FIELD_COUNT {
            return Err(GroupError::FieldCount { found: row.len() });
        }

        let class_type = column(row, fields::CLASS_TYPE).parse::<ClassType>()?;

        let weekday_value = column(row, fields::WEEKDAY);
        let weekday = parse_teaching_weekday(weekday_value)
            .ok_or_else(|| GroupError::InvalidWeekday(weekday_value.to_string()))?;

        let start_time = parse_time_field(column(row, fields::START_TIME), "start time")?;
        let end_time = parse_time_field(column(row, fields::END_TIME), "end time")?;

        let date_value = column(row, fields::START_DATE);
        let start_date =
            fields::parse_date(date_value).map_err(|source| GroupError::InvalidDateFormat {
                value: date_value.to_string(),
                source,
            })?;

        let frequency = parse_number_field(column(row, fields::FREQUENCY), "frequency")?;
        let capacity = parse_number_field(column(row, fields::CAPACITY), "capacity")?;

        Ok(Self {
            class_type,
            teacher: column(row, fields::TEACHER).to_string(),
            weekday,
            start_time,
            end_time,
            place: column(row, fields::PLACE).to_string(),
            start_date,
            frequency,
            name: column(row, fields::NAME).to_string(),
            capacity,
            students: Vec::new(),
            priority_students: Vec::new(),
            sub_groups: Vec::new(),
        })
    }

    /// Number of enrolled students, priority and regular together.
    pub fn enrolled(&self) -> usize {
        self.priority_students.len() + self.students.len()
    }

    /// Seats missing for everyone enrolled. Positive means over capacity by
    /// that many; zero or negative means there is room.
    pub fn conflicts(&self) -> i64 {
        self.enrolled() as i64 - self.capacity
    }

    /// Whether both groups occupy the same slot of the weekly grid.
    ///
    /// Slots start at fixed times, so equal start times on the same weekday
    /// are treated as an overlap and durations are not compared. A group
    /// collides with itself.
    // TODO: take frequency and start_date into account so that groups on
    // alternating weeks in the same slot are not reported.
    pub fn collides(&self, other: &Group) -> bool {
        self.weekday == other.weekday && self.start_time == other.start_time
    }

    pub fn add_student(&mut self, student: StudentRef) {
        self.students.push(student);
    }

    pub fn add_priority_student(&mut self, student: StudentRef) {
        self.priority_students.push(student);
    }

    pub fn add_sub_group(&mut self, group: Group) {
        self.sub_groups.push(group);
    }

    /// Drops every regular student with the same name as `student`.
    /// Priority students are left alone.
    pub fn remove_student(&mut self, student: &Student) {
        let before = self.students.len();
        self.students.retain(|s| s.name != student.name);
        tracing::trace!(
            group = %self.name,
            student = %student.name,
            removed = before - self.students.len(),
            "student removed"
        );
    }

    /// Sorts regular students from happiest to least happy. The sort is
    /// stable, so sorting an already sorted roster changes nothing.
    pub fn sort_students_by_happiness(&mut self) {
        self.students.sort_by(|a, b| by_happiness(a, b));
    }

    /// One single-column row per enrolled student: priority students first,
    /// then regular students, each in their current order.
    pub fn export_roster(&self) -> Vec<Vec<String>> {
        self.roster_records()
            .map(|record| vec![record.student.to_string()])
            .collect()
    }
}

impl TryFrom<&[String]> for Group {
    type Error = GroupError;

    fn try_from(row: &[String]) -> Result<Self, Self::Error> {
        Group::from_fields(row)
    }
}

impl TryFrom<&[&str]> for Group {
    type Error = GroupError;

    fn try_from(row: &[&str]) -> Result<Self, Self::Error> {
        Group::from_fields(row)
    }
}

fn parse_time_field(value: &str, field: &'static str) -> Result<NaiveTime, GroupError> {
    fields::parse_time(value).map_err(|source| GroupError::InvalidTimeFormat {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_number_field(value: &str, field: &'static str) -> Result<i64, GroupError> {
    fields::parse_number(value).map_err(|source| GroupError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

fn column<S: AsRef<str>>(row: &[S], idx: usize) -> &str {
    row[idx].as_ref()
}
