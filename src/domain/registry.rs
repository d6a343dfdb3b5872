//! Student registry keyed by student number.
//!
//! Enumeration follows insertion order. The registry is an owned value
//! handed by reference to the menu and the codec; there is no shared
//! global instance.

use indexmap::IndexMap;

use super::student::Student;

/// Caller-facing student number.
pub type StudentNumber = u32;

/// All student records, at most one per number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    students: IndexMap<StudentNumber, Student>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `student` under `id`, silently replacing any existing record.
    ///
    /// A replaced record keeps its original enumeration position.
    pub fn add(&mut self, id: StudentNumber, student: Student) {
        self.students.insert(id, student);
    }

    /// Remove the record under `id`. Returns whether one was present.
    pub fn remove(&mut self, id: StudentNumber) -> bool {
        self.students.shift_remove(&id).is_some()
    }

    /// Look up a record by number.
    pub fn get(&self, id: StudentNumber) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Mutable lookup, e.g. to record additional grades.
    pub fn get_mut(&mut self, id: StudentNumber) -> Option<&mut Student> {
        self.students.get_mut(&id)
    }

    pub fn contains(&self, id: StudentNumber) -> bool {
        self.students.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterate `(number, student)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentNumber, &Student)> {
        self.students.iter().map(|(id, s)| (*id, s))
    }

    /// Snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<(StudentNumber, &Student)> {
        self.iter().collect()
    }
}
