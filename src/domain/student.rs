//! Student record: a fixed name plus per-subject grade lists.
//!
//! Subjects keep the order in which they were first graded and each
//! subject's grades keep their recording order. Both orders are part of
//! the persisted form, so nothing here ever sorts.

use std::fmt;

use indexmap::IndexMap;

/// Ordered mapping from subject name to its recorded grades.
pub type GradeMap = IndexMap<String, Vec<f64>>;

/// A single student and their grades.
///
/// A subject only appears once a grade has been added for it. The one
/// exception is a record decoded from storage, which may carry a subject
/// with an empty list; such a subject averages to `0`.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    grades: GradeMap,
}

impl Student {
    /// Create a student with no grades.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: GradeMap::new(),
        }
    }

    /// The student's name, fixed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All subjects and their grades, in insertion order.
    pub const fn grades(&self) -> &GradeMap {
        &self.grades
    }

    /// Subject names in the order they were first graded.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.grades.keys().map(String::as_str)
    }

    /// Append a grade to `subject`, creating the subject on first use.
    pub fn add_grade(&mut self, subject: impl Into<String>, grade: f64) {
        self.grades.entry(subject.into()).or_default().push(grade);
    }

    /// Set a subject's grade list verbatim. An empty list is kept as-is.
    pub fn replace_grades(&mut self, subject: impl Into<String>, grades: Vec<f64>) {
        self.grades.insert(subject.into(), grades);
    }

    /// Arithmetic mean of a subject's grades.
    ///
    /// Returns `0.0` for an unknown subject or an empty grade list.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_grade(&self, subject: &str) -> f64 {
        match self.grades.get(subject) {
            Some(grades) if !grades.is_empty() => {
                grades.iter().sum::<f64>() / grades.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Human-readable summary for diagnostics. Not a persisted form.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Student {
    /// Order-sensitive: subject order and grade order must match too.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.grades.iter().eq(other.grades.iter())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Grades: {{", self.name)?;
        for (i, (subject, grades)) in self.grades.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{subject}: {grades:?}")?;
        }
        write!(f, "}}")
    }
}
