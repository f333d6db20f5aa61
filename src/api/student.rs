//! Student API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::StudentInput;
use crate::infrastructure::AppState;

/// Request DTO for creating or updating a student
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct StudentRequest {
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl StudentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.email.is_empty() && !is_email(&self.email) {
            return Err("email is not a valid email address".to_string());
        }
        Ok(())
    }

    fn into_input(self) -> StudentInput {
        StudentInput {
            name: self.name,
            email: self.email,
            address: self.address,
        }
    }
}

// Good enough for form input: non-empty local part, dot in the domain.
fn is_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    match parts.next() {
        Some(domain) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List all students")
    )
)]
pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    match state.student_repo.find_all().await {
        Ok(students) => {
            let total = students.len();
            Json(json!({
                "students": students,
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

#[utoipa::path(
    post,
    path = "/api/students",
    responses(
        (status = 201, description = "Student created"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentRequest>,
) -> impl IntoResponse {
    if let Err(msg) = payload.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": msg})),
        )
            .into_response();
    }

    match state.student_repo.create(payload.into_input()).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(json!({
                "student": student,
                "message": "Student created successfully"
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create student: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.student_repo.find_by_id(id).await {
        Ok(Some(student)) => (StatusCode::OK, Json(json!({"student": student}))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Student not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Update accepted"),
        (status = 404, description = "Path and payload ids disagree"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentRequest>,
) -> impl IntoResponse {
    // Reject before any mutation when the payload carries a different id.
    if payload.id.is_some_and(|payload_id| payload_id != id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Student not found"})),
        )
            .into_response();
    }

    if let Err(msg) = payload.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": msg})),
        )
            .into_response();
    }

    // A missing id is silently skipped by the repository; the response
    // is 200 either way.
    match state.student_repo.update(id, payload.into_input()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Student updated successfully"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update student: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted (idempotent)")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    // Re-confirm existence before deleting, then report success either way.
    match state.student_repo.find_by_id(id).await {
        Ok(Some(_)) => match state.student_repo.delete(id).await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({"message": "Student deleted successfully"})),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Failed to delete student: {}", e)})),
            )
                .into_response(),
        },
        Ok(None) => (
            StatusCode::OK,
            Json(json!({"message": "Student deleted successfully"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}
