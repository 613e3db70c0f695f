use utoipa::OpenApi;

use crate::modules::health::controller::HealthResponse;
use crate::modules::houses::model::{CreateHouseDto, House, UpdateHouseDto};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use roster_core::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::houses::controller::get_houses,
        crate::modules::houses::controller::create_house,
        crate::modules::houses::controller::get_house,
        crate::modules::houses::controller::update_house,
        crate::modules::houses::controller::delete_house,
        crate::modules::houses::controller::get_house_students,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            House,
            CreateHouseDto,
            UpdateHouseDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Houses", description = "House management endpoints"),
        (name = "Students", description = "Student management endpoints")
    ),
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Record management for students and their houses, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
