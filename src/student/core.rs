//! Defines the core data models for students.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Whether a student is currently enrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    /// The student is enrolled.
    Active,
    /// The student has left or been suspended.
    Inactive,
}

/// An enrolled (or formerly enrolled) student.
///
/// Students carry no references to other entities. Payments copy the student
/// name at creation time and are not kept in sync when the student record
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Opaque string ID assigned by the store.
    pub id: String,
    /// The student's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// The class the student attends, e.g. "10th".
    pub class: String,
    /// The section within the class, e.g. "A".
    pub section: String,
    /// The roll number within the class.
    pub roll_number: String,
    /// The guardian's full name.
    pub guardian_name: String,
    /// The guardian's phone number.
    pub guardian_phone: String,
    /// The student's home address.
    pub address: String,
    /// The date the student joined the school.
    pub join_date: Date,
    /// Whether the student is currently enrolled.
    pub status: StudentStatus,
}

impl Student {
    /// Whether the student matches a search `term`.
    ///
    /// Name and class match on a case-insensitive substring; the roll number
    /// matches on a case-sensitive substring. An empty term matches
    /// everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term_lower = term.to_lowercase();

        self.name.to_lowercase().contains(&term_lower)
            || self.class.to_lowercase().contains(&term_lower)
            || self.roll_number.contains(term)
    }
}

/// The fields of a student record, as entered in the add/edit form.
///
/// A draft has no ID; the store assigns one when the draft is saved. All
/// fields are owned strings so a draft can be accumulated incrementally and
/// validated once at save time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentDraft {
    /// The student's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// The class the student attends.
    pub class: String,
    /// The section within the class.
    pub section: String,
    /// The roll number within the class.
    pub roll_number: String,
    /// The guardian's full name.
    pub guardian_name: String,
    /// The guardian's phone number.
    pub guardian_phone: String,
    /// The student's home address.
    pub address: String,
    /// The date the student joined the school.
    pub join_date: Option<Date>,
    /// Whether the student is currently enrolled. Defaults to active.
    pub status: Option<StudentStatus>,
}

impl StudentDraft {
    /// Validate the draft and build a [Student] with the given `id`.
    ///
    /// `today` is used as the join date when the form left it blank.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyField] if the name or roll
    /// number is empty.
    pub fn into_student(self, id: String, today: Date) -> Result<Student, Error> {
        if self.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }

        if self.roll_number.is_empty() {
            return Err(Error::EmptyField("roll number"));
        }

        Ok(Student {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            class: self.class,
            section: self.section,
            roll_number: self.roll_number,
            guardian_name: self.guardian_name,
            guardian_phone: self.guardian_phone,
            address: self.address,
            join_date: self.join_date.unwrap_or(today),
            status: self.status.unwrap_or(StudentStatus::Active),
        })
    }
}
