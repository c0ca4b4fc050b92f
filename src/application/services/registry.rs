//! Classroom registry - Owns every classroom and student for the session
//!
//! All cross-entity validation happens here. Each operation checks its
//! preconditions before touching any state, so a failed call leaves the
//! registry exactly as it was.

use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::errors::RegistryError;
use crate::domain::entities::{Assignment, Classroom, Student};

/// What happens to student enrollment records when a classroom is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Remove the classroom name from every enrolled student's record
    #[default]
    Cascade,
    /// Leave the stale classroom name in student records
    Retain,
}

/// Result of a listing operation. An empty listing is reported distinctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Empty,
    Items(Vec<T>),
}

impl<T> Listing<T> {
    fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Empty => &[],
            Listing::Items(items) => items.as_slice(),
        }
    }
}

/// Read-only view of one assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub id: Uuid,
    pub details: String,
    pub scheduled_at: DateTime<Utc>,
    pub submissions: usize,
}

impl From<&Assignment> for AssignmentSummary {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id(),
            details: assignment.details().to_string(),
            scheduled_at: assignment.scheduled_at(),
            submissions: assignment.submission_count(),
        }
    }
}

/// Registry of classrooms and students
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassroomRegistry {
    classrooms: BTreeMap<String, Classroom>,
    students: BTreeMap<String, Student>,
    removal_policy: RemovalPolicy,
}

impl ClassroomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    pub fn classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn classroom_count(&self) -> usize {
        self.classrooms.len()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn add_classroom(&mut self, name: &str) -> Result<(), RegistryError> {
        if self.classrooms.contains_key(name) {
            return Err(RegistryError::AlreadyExists(name.to_string()));
        }
        self.classrooms.insert(name.to_string(), Classroom::new(name));
        tracing::debug!("Added classroom: {}", name);
        Ok(())
    }

    /// Classroom names in key order
    pub fn list_classrooms(&self) -> Listing<String> {
        Listing::from_vec(self.classrooms.keys().cloned().collect())
    }

    pub fn remove_classroom(&mut self, name: &str) -> Result<(), RegistryError> {
        let classroom = self.classrooms.remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        if self.removal_policy == RemovalPolicy::Cascade {
            for student_id in classroom.students() {
                if let Some(student) = self.students.get_mut(student_id) {
                    student.withdraw(name);
                }
            }
        }

        tracing::debug!(
            "Removed classroom {} ({} assignments dropped, policy {:?})",
            name,
            classroom.assignments().len(),
            self.removal_policy
        );
        Ok(())
    }

    /// Enroll a student, creating the student record on first sight.
    /// Enrolling twice in the same classroom is a no-op.
    pub fn add_student(&mut self, student_id: &str, class_name: &str) -> Result<(), RegistryError> {
        let classroom = self.classrooms.get_mut(class_name)
            .ok_or_else(|| RegistryError::NotFound(class_name.to_string()))?;

        let student = self.students
            .entry(student_id.to_string())
            .or_insert_with(|| Student::new(student_id));
        let newly_enrolled = student.enroll(class_name);
        classroom.add_student(student_id);

        if newly_enrolled {
            tracing::debug!("Enrolled {} in {}", student_id, class_name);
        } else {
            tracing::debug!("{} already enrolled in {}", student_id, class_name);
        }
        Ok(())
    }

    pub fn list_students(&self, class_name: &str) -> Result<Listing<String>, RegistryError> {
        let classroom = self.classrooms.get(class_name)
            .ok_or_else(|| RegistryError::NotFound(class_name.to_string()))?;
        Ok(Listing::from_vec(classroom.students().map(str::to_string).collect()))
    }

    /// Append a new assignment and return its surrogate id
    pub fn schedule_assignment(&mut self, class_name: &str, details: &str) -> Result<Uuid, RegistryError> {
        let classroom = self.classrooms.get_mut(class_name)
            .ok_or_else(|| RegistryError::NotFound(class_name.to_string()))?;

        if classroom.find_assignment(details).is_some() {
            tracing::warn!("{} already has an assignment \"{}\"; lookups resolve to the first one", class_name, details);
        }

        let assignment = Assignment::new(details);
        let id = assignment.id();
        classroom.add_assignment(assignment);
        tracing::debug!("Scheduled assignment {} for {}", id, class_name);
        Ok(id)
    }

    /// Mark the first assignment matching `details` as submitted.
    ///
    /// Checks run in order: classroom, assignment, enrollment.
    pub fn submit_assignment(&mut self, student_id: &str, class_name: &str, details: &str) -> Result<(), RegistryError> {
        let classroom = self.classrooms.get_mut(class_name)
            .ok_or_else(|| RegistryError::NotFound(class_name.to_string()))?;

        let assignment = classroom.find_assignment_mut(details)
            .ok_or_else(|| RegistryError::AssignmentNotFound {
                class_name: class_name.to_string(),
                details: details.to_string(),
            })?;

        let enrolled = self.students
            .get(student_id)
            .is_some_and(|student| student.is_enrolled_in(class_name));
        if !enrolled {
            return Err(RegistryError::NotEnrolled {
                student_id: student_id.to_string(),
                class_name: class_name.to_string(),
            });
        }

        assignment.submit(student_id);
        tracing::debug!("{} submitted \"{}\" in {}", student_id, details, class_name);
        Ok(())
    }

    pub fn list_assignments(&self, class_name: &str) -> Result<Listing<AssignmentSummary>, RegistryError> {
        let classroom = self.classrooms.get(class_name)
            .ok_or_else(|| RegistryError::NotFound(class_name.to_string()))?;
        Ok(Listing::from_vec(
            classroom.assignments().iter().map(AssignmentSummary::from).collect(),
        ))
    }

    /// Whether the student has submitted the first assignment matching `details`
    pub fn submission_status(&self, student_id: &str, class_name: &str, details: &str) -> Result<bool, RegistryError> {
        let classroom = self.classrooms.get(class_name)
            .ok_or_else(|| RegistryError::NotFound(class_name.to_string()))?;

        let assignment = classroom.find_assignment(details)
            .ok_or_else(|| RegistryError::AssignmentNotFound {
                class_name: class_name.to_string(),
                details: details.to_string(),
            })?;

        let enrolled = self.students
            .get(student_id)
            .is_some_and(|student| student.is_enrolled_in(class_name));
        if !enrolled {
            return Err(RegistryError::NotEnrolled {
                student_id: student_id.to_string(),
                class_name: class_name.to_string(),
            });
        }

        Ok(assignment.is_submitted(student_id))
    }
}
