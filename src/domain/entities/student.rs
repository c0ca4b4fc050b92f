use std::collections::BTreeSet;
use std::fmt;

/// A student known to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
    enrolled_classes: BTreeSet<String>,
}

impl Student {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enrolled_classes: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record enrollment in a classroom. Returns false if already enrolled.
    pub(crate) fn enroll(&mut self, class_name: impl Into<String>) -> bool {
        self.enrolled_classes.insert(class_name.into())
    }

    /// Drop a classroom from the enrollment record
    pub(crate) fn withdraw(&mut self, class_name: &str) -> bool {
        self.enrolled_classes.remove(class_name)
    }

    pub fn is_enrolled_in(&self, class_name: &str) -> bool {
        self.enrolled_classes.contains(class_name)
    }

    pub fn enrolled_classes(&self) -> impl Iterator<Item = &str> {
        self.enrolled_classes.iter().map(String::as_str)
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrolled_classes.len()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
