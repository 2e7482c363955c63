use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Shared handle to a student. Groups hold these without owning the student;
/// the allocator that builds the timetable keeps its own handles.
pub type StudentRef = Rc<Student>;

/// A student as seen by a group: a name used as identity and a happiness
/// score computed elsewhere and updated in place between allocation rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    happiness: Cell<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>, happiness: f64) -> Self {
        Self {
            name: name.into(),
            happiness: Cell::new(happiness),
        }
    }

    pub fn shared(name: impl Into<String>, happiness: f64) -> StudentRef {
        Rc::new(Self::new(name, happiness))
    }

    pub fn happiness(&self) -> f64 {
        self.happiness.get()
    }

    pub fn set_happiness(&self, happiness: f64) {
        self.happiness.set(happiness);
    }
}

/// Orders students by descending happiness.
///
/// Equal scores compare `Equal` and are left to the sort's own tie handling.
/// Scores compare with `f64::total_cmp`, so a positive NaN sorts first.
pub fn by_happiness(a: &Student, b: &Student) -> Ordering {
    b.happiness().total_cmp(&a.happiness())
}
