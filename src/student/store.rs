//! The in-memory student store.

use time::Date;

use crate::{
    Error,
    ids::next_id_after,
    student::{Student, StudentDraft},
};

/// Owns the student list and applies edits by wholesale replacement.
///
/// IDs are opaque strings from a monotonic counter seeded past the highest
/// numeric ID in the initial data. The store is single-threaded; the list is
/// owned exclusively by the view that displays it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentStore {
    students: Vec<Student>,
    next_id: u64,
}

impl InMemoryStudentStore {
    /// Create a store seeded with `students`.
    pub fn new(students: Vec<Student>) -> Self {
        let next_id = next_id_after(students.iter().map(|student| student.id.as_str()));

        Self { students, next_id }
    }

    /// All students, in insertion order.
    pub fn get_all(&self) -> &[Student] {
        &self.students
    }

    /// The students matching the search `term`. See
    /// [Student::matches_search] for the matching rules.
    pub fn search(&self, term: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| student.matches_search(term))
            .collect()
    }

    /// The student with the given `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Validate `draft`, assign it the next ID and add it to the list.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyField] if a required field
    /// of the draft is empty.
    pub fn create(&mut self, draft: StudentDraft, today: Date) -> Result<&Student, Error> {
        let id = self.next_id.to_string();
        let student = draft.into_student(id, today)?;

        self.next_id += 1;
        self.students.push(student);

        Ok(self.students.last().expect("just pushed"))
    }

    /// Replace the stored record with the same ID as `student`.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::UpdateMissingStudent] if no
    /// student with that ID exists.
    pub fn update(&mut self, student: Student) -> Result<(), Error> {
        match self.students.iter_mut().find(|s| s.id == student.id) {
            Some(existing) => {
                *existing = student;
                Ok(())
            }
            None => Err(Error::UpdateMissingStudent),
        }
    }

    /// Remove the student with the given `id`.
    ///
    /// Payments that name the student are left untouched; there is no
    /// referential integrity between the lists.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::DeleteMissingStudent] if no
    /// student with that ID exists.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        let before = self.students.len();
        self.students.retain(|student| student.id != id);

        if self.students.len() == before {
            Err(Error::DeleteMissingStudent)
        } else {
            Ok(())
        }
    }
}
