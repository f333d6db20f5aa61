//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// Student data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Field set accepted when creating or updating a student
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Course data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub credits: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Field set accepted when creating or updating a course
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub description: String,
    pub credits: i32,
}

/// Label/value pair for form select lists
#[derive(Debug, Clone, serde::Serialize)]
pub struct SelectOption {
    pub id: i32,
    pub label: String,
}

/// Enrolment with its student and course resolved for display.
///
/// The nested records are `None` only when the stored foreign key no
/// longer matches a row (inserts are not existence-checked).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Enrolment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrolment_date: String,
    pub student: Option<Student>,
    pub course: Option<Course>,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating an enrolment
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewEnrolment {
    pub student_id: i32,
    pub course_id: i32,
    pub enrolment_date: String,
}

/// Input for updating an enrolment. The record to update is identified
/// by the payload's own `id`, not a separate parameter.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateEnrolment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrolment_date: String,
}

/// Repository trait for Student entity
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Number of stored students
    async fn count(&self) -> Result<u64, DomainError>;

    /// Find all students
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;

    /// Find a student by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DomainError>;

    /// Create a new student
    async fn create(&self, input: StudentInput) -> Result<Student, DomainError>;

    /// Copy the input fields onto the stored record. A missing id is a
    /// no-op, not an error.
    async fn update(&self, id: i32, input: StudentInput) -> Result<(), DomainError>;

    /// Delete a student by ID. A missing id is a no-op.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Course entity
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Number of stored courses
    async fn count(&self) -> Result<u64, DomainError>;

    /// Find all courses
    async fn find_all(&self) -> Result<Vec<Course>, DomainError>;

    /// Find a course by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DomainError>;

    /// Create a new course
    async fn create(&self, input: CourseInput) -> Result<Course, DomainError>;

    /// Copy the input fields onto the stored record. A missing id is a
    /// no-op, not an error.
    async fn update(&self, id: i32, input: CourseInput) -> Result<(), DomainError>;

    /// Delete a course by ID. A missing id is a no-op.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Enrolment entity.
///
/// Unlike the student/course repositories, every operation here reports
/// absence explicitly with `DomainError::NotFound` because callers map
/// the outcome straight to a transport status.
#[async_trait]
pub trait EnrolmentRepository: Send + Sync {
    /// Number of stored enrolments
    async fn count(&self) -> Result<u64, DomainError>;

    /// Find all enrolments with student and course resolved
    async fn find_all(&self) -> Result<Vec<Enrolment>, DomainError>;

    /// Find an enrolment by ID with student and course resolved
    async fn find_by_id(&self, id: i32) -> Result<Enrolment, DomainError>;

    /// Create a new enrolment
    async fn create(&self, input: NewEnrolment) -> Result<Enrolment, DomainError>;

    /// Overwrite `student_id`, `course_id` and `enrolment_date` of the
    /// record identified by `input.id`
    async fn update(&self, input: UpdateEnrolment) -> Result<(), DomainError>;

    /// Delete an enrolment by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
