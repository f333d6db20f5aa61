//! Course API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::CourseInput;
use crate::infrastructure::AppState;

/// Request DTO for creating or updating a course
#[derive(Debug, Deserialize)]
pub struct CourseRequest {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub credits: i32,
}

impl CourseRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("description must not be empty".to_string());
        }
        Ok(())
    }

    fn into_input(self) -> CourseInput {
        CourseInput {
            name: self.name,
            description: self.description,
            credits: self.credits,
        }
    }
}

pub async fn list_courses(State(state): State<AppState>) -> impl IntoResponse {
    match state.course_repo.find_all().await {
        Ok(courses) => {
            let total = courses.len();
            Json(json!({
                "courses": courses,
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

pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CourseRequest>,
) -> impl IntoResponse {
    if let Err(msg) = payload.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": msg})),
        )
            .into_response();
    }

    match state.course_repo.create(payload.into_input()).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(json!({
                "course": course,
                "message": "Course created successfully"
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create course: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn get_course(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.course_repo.find_by_id(id).await {
        Ok(Some(course)) => (StatusCode::OK, Json(json!({"course": course}))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Course not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CourseRequest>,
) -> impl IntoResponse {
    if payload.id.is_some_and(|payload_id| payload_id != id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Course not found"})),
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

    match state.course_repo.update(id, payload.into_input()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Course updated successfully"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update course: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.course_repo.find_by_id(id).await {
        Ok(Some(_)) => match state.course_repo.delete(id).await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({"message": "Course deleted successfully"})),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Failed to delete course: {}", e)})),
            )
                .into_response(),
        },
        Ok(None) => (
            StatusCode::OK,
            Json(json!({"message": "Course deleted successfully"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}
