use crate::group::{Group, GroupError};
use serde::Serialize;
use std::io;

/// One line of a group's attendance list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRecord<'a> {
    pub student: &'a str,
}

impl Group {
    pub fn roster_records(&self) -> impl Iterator<Item = RosterRecord<'_>> {
        self.priority_students
            .iter()
            .chain(self.students.iter())
            .map(|student| RosterRecord {
                student: student.name.as_str(),
            })
    }
}

/// Writes the group's roster as headerless one-column CSV, in the same order
/// as [`Group::export_roster`].
pub fn write_roster<W: io::Write>(group: &Group, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for record in group.roster_records() {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

impl TryFrom<&csv::StringRecord> for Group {
    type Error = GroupError;

    fn try_from(record: &csv::StringRecord) -> Result<Self, Self::Error> {
        let row: Vec<&str> = record.iter().collect();
        Group::from_fields(&row)
    }
}
