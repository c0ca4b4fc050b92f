use std::collections::BTreeSet;
use super::Assignment;

/// Named container of enrolled students and scheduled assignments.
///
/// Students are held by id; the `Student` records themselves live in the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    name: String,
    students: BTreeSet<String>,
    assignments: Vec<Assignment>,
}

impl Classroom {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: BTreeSet::new(),
            assignments: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn add_student(&mut self, student_id: impl Into<String>) -> bool {
        self.students.insert(student_id.into())
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.contains(student_id)
    }

    pub fn students(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(String::as_str)
    }

    pub(crate) fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Assignments in the order they were scheduled
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// First assignment whose details match exactly
    pub fn find_assignment(&self, details: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.matches(details))
    }

    pub(crate) fn find_assignment_mut(&mut self, details: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.matches(details))
    }
}
