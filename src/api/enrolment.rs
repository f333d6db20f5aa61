//! Enrolment API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{DomainError, NewEnrolment, SelectOption, UpdateEnrolment};
use crate::infrastructure::AppState;

/// Request DTO for creating or updating an enrolment
#[derive(Debug, Deserialize)]
pub struct EnrolmentRequest {
    pub id: Option<i32>,
    pub student_id: i32,
    pub course_id: i32,
    pub enrolment_date: String,
}

impl EnrolmentRequest {
    fn validate(&self) -> Result<(), String> {
        if !is_date(&self.enrolment_date) {
            return Err("enrolment_date must be RFC 3339 or YYYY-MM-DD".to_string());
        }
        Ok(())
    }
}

fn is_date(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
        || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

pub async fn list_enrolments(State(state): State<AppState>) -> impl IntoResponse {
    match state.enrolment_repo.find_all().await {
        Ok(enrolments) => {
            let total = enrolments.len();
            Json(json!({
                "enrolments": enrolments,
                "total": total
            }))
            .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

/// Label/value lists for the student and course selects on enrolment forms
pub async fn enrolment_options(State(state): State<AppState>) -> impl IntoResponse {
    let students = match state.student_repo.find_all().await {
        Ok(students) => students,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Database error: {}", e)})),
            )
                .into_response();
        }
    };

    let courses = match state.course_repo.find_all().await {
        Ok(courses) => courses,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Database error: {}", e)})),
            )
                .into_response();
        }
    };

    let students: Vec<SelectOption> = students
        .into_iter()
        .map(|s| SelectOption {
            id: s.id,
            label: s.name,
        })
        .collect();

    let courses: Vec<SelectOption> = courses
        .into_iter()
        .map(|c| SelectOption {
            id: c.id,
            label: c.name,
        })
        .collect();

    Json(json!({
        "students": students,
        "courses": courses
    }))
    .into_response()
}

pub async fn get_enrolment(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.enrolment_repo.find_by_id(id).await {
        Ok(enrolment) => (StatusCode::OK, Json(json!({"enrolment": enrolment}))).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Enrolment not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn create_enrolment(
    State(state): State<AppState>,
    Json(payload): Json<EnrolmentRequest>,
) -> impl IntoResponse {
    if let Err(msg) = payload.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": msg})),
        )
            .into_response();
    }

    let input = NewEnrolment {
        student_id: payload.student_id,
        course_id: payload.course_id,
        enrolment_date: payload.enrolment_date,
    };

    match state.enrolment_repo.create(input).await {
        Ok(enrolment) => (
            StatusCode::CREATED,
            Json(json!({
                "enrolment": enrolment,
                "message": "Enrolment created successfully"
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create enrolment: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn update_enrolment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EnrolmentRequest>,
) -> impl IntoResponse {
    // The payload's own id identifies the record; the path must agree.
    let entity_id = match payload.id {
        Some(payload_id) if payload_id != id => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Enrolment not found"})),
            )
                .into_response();
        }
        Some(payload_id) => payload_id,
        None => id,
    };

    if let Err(msg) = payload.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": msg})),
        )
            .into_response();
    }

    let input = UpdateEnrolment {
        id: entity_id,
        student_id: payload.student_id,
        course_id: payload.course_id,
        enrolment_date: payload.enrolment_date,
    };

    match state.enrolment_repo.update(input).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Enrolment updated successfully"})),
        )
            .into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Enrolment not found"})),
        )
            .into_response(),
        Err(DomainError::Conflict) => (
            StatusCode::CONFLICT,
            Json(json!({"error": "Enrolment was modified concurrently"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update enrolment: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn delete_enrolment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.enrolment_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Enrolment deleted successfully"})),
        )
            .into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Enrolment not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to delete enrolment: {}", e)})),
        )
            .into_response(),
    }
}
