//! Repository implementations using SeaORM

pub mod course_repository;
pub mod enrolment_repository;
pub mod student_repository;

pub use course_repository::SeaOrmCourseRepository;
pub use enrolment_repository::SeaOrmEnrolmentRepository;
pub use student_repository::SeaOrmStudentRepository;
