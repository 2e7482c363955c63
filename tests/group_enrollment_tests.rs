use std::rc::Rc;
use timetable_group::{Group, Student, StudentRef};

fn group_with_capacity(capacity: i64) -> Group {
    let capacity = capacity.to_string();
    Group::from_fields(&[
        "Algo", "Lecture", "Smith", "Monday", "09:00", "10:30", "Room 5", "01-09-25", "1",
        "Algo-A", capacity.as_str(),
    ])
    .unwrap()
}

fn names(students: &[StudentRef]) -> Vec<&str> {
    students.iter().map(|s| s.name.as_str()).collect()
}

fn happiness(students: &[StudentRef]) -> Vec<f64> {
    students.iter().map(|s| s.happiness()).collect()
}

#[test]
fn algo_scenario_conflicts_sort_and_roster() {
    let mut group = group_with_capacity(2);
    group.add_student(Student::shared("ann", 3.0));
    group.add_student(Student::shared("bob", 7.0));
    assert_eq!(group.conflicts(), 0);

    group.sort_students_by_happiness();
    assert_eq!(happiness(&group.students), vec![7.0, 3.0]);
    assert_eq!(
        group.export_roster(),
        vec![vec!["bob".to_string()], vec!["ann".to_string()]]
    );

    group.add_student(Student::shared("cid", 5.0));
    assert_eq!(group.conflicts(), 1);
}

#[test]
fn conflicts_grow_by_one_per_enrollment_of_either_kind() {
    let mut group = group_with_capacity(1);
    assert_eq!(group.conflicts(), -1);

    group.add_priority_student(Student::shared("p1", 0.0));
    assert_eq!(group.conflicts(), 0);

    group.add_student(Student::shared("r1", 0.0));
    assert_eq!(group.conflicts(), 1);
    assert_eq!(group.capacity, 1);
    assert_eq!(group.enrolled(), 2);
}

#[test]
fn conflicts_with_negative_capacity() {
    let mut group = group_with_capacity(-2);
    assert_eq!(group.conflicts(), 2);
    group.add_student(Student::shared("a", 1.0));
    assert_eq!(group.conflicts(), 3);
}

#[test]
fn remove_student_matches_by_name_and_keeps_order() {
    let mut group = group_with_capacity(10);
    for name in ["a", "b", "c", "b", "d"] {
        group.add_student(Student::shared(name, 1.0));
    }

    // A different handle with the same name still matches.
    group.remove_student(&Student::new("b", 99.0));
    assert_eq!(names(&group.students), vec!["a", "c", "d"]);
}

#[test]
fn remove_absent_student_is_a_no_op() {
    let mut group = group_with_capacity(10);
    for name in ["a", "b"] {
        group.add_student(Student::shared(name, 1.0));
    }
    group.remove_student(&Student::new("zed", 0.0));
    assert_eq!(names(&group.students), vec!["a", "b"]);

    group.remove_student(&Student::new("a", 0.0));
    group.remove_student(&Student::new("a", 0.0));
    assert_eq!(names(&group.students), vec!["b"]);
}

#[test]
fn remove_student_leaves_priority_students() {
    let mut group = group_with_capacity(10);
    group.add_priority_student(Student::shared("a", 1.0));
    group.add_student(Student::shared("a", 1.0));
    group.remove_student(&Student::new("a", 1.0));
    assert!(group.students.is_empty());
    assert_eq!(names(&group.priority_students), vec!["a"]);
}

#[test]
fn sorting_is_non_increasing_and_idempotent() {
    let mut group = group_with_capacity(10);
    for (name, score) in [("a", 2.0), ("b", 9.5), ("c", -1.0), ("d", 2.0), ("e", 4.0)] {
        group.add_student(Student::shared(name, score));
    }
    group.sort_students_by_happiness();
    let scores = happiness(&group.students);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");

    let once = names(&group.students)
        .into_iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    group.sort_students_by_happiness();
    assert_eq!(names(&group.students), once);
}

#[test]
fn sorting_reads_current_happiness_and_skips_priority_students() {
    let mut group = group_with_capacity(10);
    let low = Student::shared("low", 1.0);
    let high = Student::shared("high", 2.0);
    group.add_priority_student(Student::shared("p-low", 0.0));
    group.add_priority_student(Student::shared("p-high", 10.0));
    group.add_student(Rc::clone(&high));
    group.add_student(Rc::clone(&low));

    low.set_happiness(5.0);
    group.sort_students_by_happiness();

    assert_eq!(names(&group.students), vec!["low", "high"]);
    assert_eq!(names(&group.priority_students), vec!["p-low", "p-high"]);
}

#[test]
fn roster_lists_priority_students_first() {
    let mut group = group_with_capacity(1);
    group.add_student(Student::shared("r1", 1.0));
    group.add_priority_student(Student::shared("p1", 1.0));
    group.add_student(Student::shared("r2", 1.0));
    group.add_priority_student(Student::shared("p2", 1.0));

    let roster = group.export_roster();
    assert_eq!(roster.len(), group.enrolled());
    let flat: Vec<&str> = roster.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(flat, vec!["p1", "p2", "r1", "r2"]);
    assert!(roster.iter().all(|row| row.len() == 1));
}

#[test]
fn empty_group_exports_empty_roster() {
    let group = group_with_capacity(0);
    assert!(group.export_roster().is_empty());
    assert_eq!(group.conflicts(), 0);
}

#[test]
fn sub_groups_are_kept_in_order() {
    let mut group = group_with_capacity(30);
    let mut lab = group_with_capacity(15);
    lab.name = "Algo-A-lab1".into();
    group.add_sub_group(lab);
    group.add_sub_group(group_with_capacity(15));
    assert_eq!(group.sub_groups.len(), 2);
    assert_eq!(group.sub_groups[0].name, "Algo-A-lab1");
}
