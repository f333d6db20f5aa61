use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::student::list_students,
        api::student::create_student,
        api::student::get_student,
        api::student::update_student,
        api::student::delete_student,
        // Add other endpoints here as we document them
    ),
    components(
        schemas(
            api::student::StudentRequest,
        )
    ),
    tags(
        (name = "enrolbase", description = "Student enrolment API")
    )
)]
pub struct ApiDoc;
