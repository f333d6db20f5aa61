//! SeaORM implementation of CourseRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::domain::{Course, CourseInput, CourseRepository, DomainError};
use crate::models::course::{ActiveModel, Entity as CourseEntity, Model};

/// SeaORM-based implementation of CourseRepository
pub struct SeaOrmCourseRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> Course {
    Course {
        id: model.id,
        name: model.name,
        description: model.description,
        credits: model.credits,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        Ok(CourseEntity::find().count(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let courses = CourseEntity::find().all(&self.db).await?;

        Ok(courses.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DomainError> {
        let course = CourseEntity::find_by_id(id).one(&self.db).await?;

        Ok(course.map(to_domain))
    }

    async fn create(&self, input: CourseInput) -> Result<Course, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let course = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            credits: Set(input.credits),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = course.insert(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn update(&self, id: i32, input: CourseInput) -> Result<(), DomainError> {
        let existing = match CourseEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => model,
            None => return Ok(()),
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.credits = Set(input.credits);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        active.update(&self.db).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        CourseEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}
