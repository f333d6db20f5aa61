//! SeaORM implementation of StudentRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::domain::{DomainError, Student, StudentInput, StudentRepository};
use crate::models::student::{ActiveModel, Entity as StudentEntity, Model};

/// SeaORM-based implementation of StudentRepository
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> Student {
    Student {
        id: model.id,
        name: model.name,
        email: model.email,
        address: model.address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        Ok(StudentEntity::find().count(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let students = StudentEntity::find().all(&self.db).await?;

        Ok(students.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DomainError> {
        let student = StudentEntity::find_by_id(id).one(&self.db).await?;

        Ok(student.map(to_domain))
    }

    async fn create(&self, input: StudentInput) -> Result<Student, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let student = ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            address: Set(input.address),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = student.insert(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn update(&self, id: i32, input: StudentInput) -> Result<(), DomainError> {
        let existing = match StudentEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => model,
            // Missing ids are skipped, matching delete below.
            None => return Ok(()),
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.email = Set(input.email);
        active.address = Set(input.address);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        active.update(&self.db).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // rows_affected is deliberately not checked: deleting a missing
        // id leaves the collection unchanged and reports nothing.
        StudentEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}
