use sea_orm::*;

use crate::models::{course, enrolment, student};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Seeding a populated database would duplicate the demo records.
    let existing = student::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!("Database already contains {} students, skipping seed", existing);
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();

    // 1. Students
    let students = vec![
        ("Amelia Hartley", "amelia.hartley@example.com", "12 Rowan Close, York"),
        ("Dev Patel", "dev.patel@example.com", "4 Mill Lane, Leeds"),
        ("Sofia Moreno", "sofia.moreno@example.com", "88 Harbour St, Bristol"),
    ];

    for (name, email, address) in students {
        let record = student::ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            address: Set(address.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        student::Entity::insert(record).exec(db).await?;
    }

    // 2. Courses
    let courses = vec![
        ("CS101", "Introduction to Programming", 3),
        ("MA201", "Linear Algebra", 4),
        ("HI110", "Modern European History", 2),
    ];

    for (name, description, credits) in courses {
        let record = course::ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            credits: Set(credits),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        course::Entity::insert(record).exec(db).await?;
    }

    // 3. One enrolment linking the first student to the first course
    let record = enrolment::ActiveModel {
        student_id: Set(1),
        course_id: Set(1),
        enrolment_date: Set(now.clone()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    enrolment::Entity::insert(record).exec(db).await?;

    Ok(())
}
