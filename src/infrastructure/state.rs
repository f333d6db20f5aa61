//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{CourseRepository, EnrolmentRepository, StudentRepository};
use crate::infrastructure::{
    SeaOrmCourseRepository, SeaOrmEnrolmentRepository, SeaOrmStudentRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Student repository
    pub student_repo: Arc<dyn StudentRepository>,
    /// Course repository
    pub course_repo: Arc<dyn CourseRepository>,
    /// Enrolment repository
    pub enrolment_repo: Arc<dyn EnrolmentRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let student_repo = Arc::new(SeaOrmStudentRepository::new(db.clone()));
        let course_repo = Arc::new(SeaOrmCourseRepository::new(db.clone()));
        let enrolment_repo = Arc::new(SeaOrmEnrolmentRepository::new(db.clone()));

        Self {
            db,
            student_repo,
            course_repo,
            enrolment_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AsRef<DatabaseConnection> for AppState {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.db
    }
}
