pub mod class_type;
pub mod group;
pub(crate) mod group_fields;
pub mod roster;
pub mod student;

pub use class_type::{ClassType, TEACHING_DAYS, UnknownClassType, parse_teaching_weekday};
pub use group::{Group, GroupError, GroupErrorKind};
pub use group_fields::LayoutError;
pub use roster::{RosterRecord, write_roster};
pub use student::{Student, StudentRef, by_happiness};
