use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a timetable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    Class,
    Lecture,
    Laboratory,
}

impl ClassType {
    pub const ALL: [ClassType; 3] = [ClassType::Class, ClassType::Lecture, ClassType::Laboratory];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Class => "Class",
            ClassType::Lecture => "Lecture",
            ClassType::Laboratory => "Laboratory",
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClassType(pub String);

impl fmt::Display for UnknownClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incorrect class type {:?}, available types: Class, Lecture, Laboratory",
            self.0
        )
    }
}

impl std::error::Error for UnknownClassType {}

impl FromStr for ClassType {
    type Err = UnknownClassType;

    /// Exact, case-sensitive match against the three literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Class" => Ok(ClassType::Class),
            "Lecture" => Ok(ClassType::Lecture),
            "Laboratory" => Ok(ClassType::Laboratory),
            other => Err(UnknownClassType(other.to_string())),
        }
    }
}

/// Days on which the university runs classes. Weekends are never valid.
pub const TEACHING_DAYS: [(&str, Weekday); 5] = [
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
];

/// Looks up a full English weekday name in [`TEACHING_DAYS`].
///
/// Anything not listed, including the empty string, lowercase names and
/// chrono's abbreviations, yields `None`.
pub fn parse_teaching_weekday(value: &str) -> Option<Weekday> {
    TEACHING_DAYS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, day)| *day)
}
