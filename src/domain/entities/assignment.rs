use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// A scheduled task within a classroom.
///
/// `details` is the lookup key; `id` and `scheduled_at` are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    id: Uuid,
    details: String,
    scheduled_at: DateTime<Utc>,
    submissions: HashMap<String, bool>,
}

impl Assignment {
    pub(crate) fn new(details: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            details: details.into(),
            scheduled_at: Utc::now(),
            submissions: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    /// Exact-equality match on the details text
    pub fn matches(&self, details: &str) -> bool {
        self.details == details
    }

    pub(crate) fn submit(&mut self, student_id: impl Into<String>) {
        self.submissions.insert(student_id.into(), true);
    }

    /// Unknown students have not submitted
    pub fn is_submitted(&self, student_id: &str) -> bool {
        self.submissions.get(student_id).copied().unwrap_or(false)
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.values().filter(|submitted| **submitted).count()
    }
}
