//! Mediator requests and handlers for students.

use async_trait::async_trait;
use roster_core::{AppError, MediatorBuilder, MediatorError, Request, RequestHandler};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::metrics::{track_record_created, track_record_deleted, track_record_updated};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::modules::students::service::StudentService;

const ENTITY: &str = "student";

/// Lists students, optionally restricted to one house.
#[derive(Debug, Default)]
pub struct GetStudentsQuery {
    pub house_id: Option<i32>,
}

impl Request for GetStudentsQuery {
    type Response = Vec<Student>;
}

#[derive(Debug)]
pub struct AddStudentCommand(pub CreateStudentDto);

impl Request for AddStudentCommand {
    type Response = Student;
}

#[derive(Debug)]
pub struct GetStudentByIdQuery(pub i32);

impl Request for GetStudentByIdQuery {
    type Response = Student;
}

#[derive(Debug)]
pub struct UpdateStudentCommand {
    pub id: i32,
    pub student: UpdateStudentDto,
}

impl Request for UpdateStudentCommand {
    type Response = Student;
}

/// Deletes a student if present and answers with the students that remain.
#[derive(Debug)]
pub struct DeleteStudentCommand(pub i32);

impl Request for DeleteStudentCommand {
    type Response = Vec<Student>;
}

pub struct GetStudentsHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for GetStudentsHandler {
    type Request = GetStudentsQuery;

    async fn handle(&self, request: GetStudentsQuery) -> Result<Vec<Student>, AppError> {
        StudentService::list_students(&self.db, request.house_id).await
    }
}

pub struct AddStudentHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for AddStudentHandler {
    type Request = AddStudentCommand;

    #[instrument(skip(self))]
    async fn handle(&self, request: AddStudentCommand) -> Result<Student, AppError> {
        let student = StudentService::create_student(&self.db, request.0).await?;
        track_record_created(ENTITY);
        Ok(student)
    }
}

pub struct GetStudentByIdHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for GetStudentByIdHandler {
    type Request = GetStudentByIdQuery;

    async fn handle(&self, request: GetStudentByIdQuery) -> Result<Student, AppError> {
        StudentService::find_student(&self.db, request.0)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }
}

pub struct UpdateStudentHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for UpdateStudentHandler {
    type Request = UpdateStudentCommand;

    #[instrument(skip(self))]
    async fn handle(&self, request: UpdateStudentCommand) -> Result<Student, AppError> {
        let student = StudentService::update_student(&self.db, request.id, request.student)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;
        track_record_updated(ENTITY);
        Ok(student)
    }
}

pub struct DeleteStudentHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for DeleteStudentHandler {
    type Request = DeleteStudentCommand;

    #[instrument(skip(self))]
    async fn handle(&self, request: DeleteStudentCommand) -> Result<Vec<Student>, AppError> {
        let removed = StudentService::delete_student(&self.db, request.0).await?;
        if removed {
            track_record_deleted(ENTITY);
        } else {
            debug!(id = request.0, "No student to delete");
        }

        StudentService::list_students(&self.db, None).await
    }
}

/// Registers every student handler against `db`.
pub fn register(builder: MediatorBuilder, db: &PgPool) -> Result<MediatorBuilder, MediatorError> {
    builder
        .register(GetStudentsHandler { db: db.clone() })?
        .register(AddStudentHandler { db: db.clone() })?
        .register(GetStudentByIdHandler { db: db.clone() })?
        .register(UpdateStudentHandler { db: db.clone() })?
        .register(DeleteStudentHandler { db: db.clone() })
}
