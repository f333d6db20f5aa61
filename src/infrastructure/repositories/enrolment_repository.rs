//! SeaORM implementation of EnrolmentRepository
//!
//! Reads resolve the related student and course in the repository so
//! that no caller ever has to chase the foreign keys itself.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::domain::{
    Course, DomainError, Enrolment, EnrolmentRepository, NewEnrolment, Student, UpdateEnrolment,
};
use crate::models::course::{self, Entity as CourseEntity};
use crate::models::enrolment::{ActiveModel, Entity as EnrolmentEntity};
use crate::models::student::Entity as StudentEntity;

/// SeaORM-based implementation of EnrolmentRepository
pub struct SeaOrmEnrolmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnrolmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn student_to_domain(model: crate::models::student::Model) -> Student {
    Student {
        id: model.id,
        name: model.name,
        email: model.email,
        address: model.address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn course_to_domain(model: course::Model) -> Course {
    Course {
        id: model.id,
        name: model.name,
        description: model.description,
        credits: model.credits,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn to_domain(
    model: crate::models::enrolment::Model,
    student: Option<crate::models::student::Model>,
    course: Option<course::Model>,
) -> Enrolment {
    Enrolment {
        id: model.id,
        student_id: model.student_id,
        course_id: model.course_id,
        enrolment_date: model.enrolment_date,
        student: student.map(student_to_domain),
        course: course.map(course_to_domain),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl EnrolmentRepository for SeaOrmEnrolmentRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        Ok(EnrolmentEntity::find().count(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<Enrolment>, DomainError> {
        let enrolments_with_students = EnrolmentEntity::find()
            .find_also_related(StudentEntity)
            .all(&self.db)
            .await?;

        // Second relation fetched as one batched query, not per row.
        let course_ids: Vec<i32> = enrolments_with_students
            .iter()
            .map(|(e, _)| e.course_id)
            .collect();

        let mut course_map = HashMap::new();

        if !course_ids.is_empty() {
            let courses = CourseEntity::find()
                .filter(course::Column::Id.is_in(course_ids))
                .all(&self.db)
                .await?;

            for c in courses {
                course_map.insert(c.id, c);
            }
        }

        Ok(enrolments_with_students
            .into_iter()
            .map(|(enrolment, student)| {
                let c = course_map.get(&enrolment.course_id).cloned();
                to_domain(enrolment, student, c)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Enrolment, DomainError> {
        let (enrolment, student) = EnrolmentEntity::find_by_id(id)
            .find_also_related(StudentEntity)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let c = CourseEntity::find_by_id(enrolment.course_id)
            .one(&self.db)
            .await?;

        Ok(to_domain(enrolment, student, c))
    }

    async fn create(&self, input: NewEnrolment) -> Result<Enrolment, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let enrolment = ActiveModel {
            student_id: Set(input.student_id),
            course_id: Set(input.course_id),
            enrolment_date: Set(input.enrolment_date),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = enrolment.insert(&self.db).await?;

        // Re-read through find_by_id so the caller gets the resolved record.
        self.find_by_id(result.id).await
    }

    async fn update(&self, input: UpdateEnrolment) -> Result<(), DomainError> {
        let existing = EnrolmentEntity::find_by_id(input.id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.student_id = Set(input.student_id);
        active.course_id = Set(input.course_id);
        active.enrolment_date = Set(input.enrolment_date);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        match active.update(&self.db).await {
            Ok(_) => Ok(()),
            // The write matched no row: the record moved under us between
            // the read above and this statement.
            Err(DbErr::RecordNotUpdated) => {
                match EnrolmentEntity::find_by_id(input.id).one(&self.db).await? {
                    None => Err(DomainError::NotFound),
                    Some(_) => Err(DomainError::Conflict),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = EnrolmentEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
