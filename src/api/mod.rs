pub mod course;
pub mod enrolment;
pub mod health;
pub mod student;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Students
        .route(
            "/students",
            get(student::list_students).post(student::create_student),
        )
        .route(
            "/students/:id",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        // Courses
        .route(
            "/courses",
            get(course::list_courses).post(course::create_course),
        )
        .route(
            "/courses/:id",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        // Enrolments
        .route(
            "/enrolments",
            get(enrolment::list_enrolments).post(enrolment::create_enrolment),
        )
        .route("/enrolments/options", get(enrolment::enrolment_options))
        .route(
            "/enrolments/:id",
            get(enrolment::get_enrolment)
                .put(enrolment::update_enrolment)
                .delete(enrolment::delete_enrolment),
        )
        .with_state(state)
}
