use enrolbase::db;
use enrolbase::domain::{
    CourseInput, CourseRepository, DomainError, EnrolmentRepository, NewEnrolment, StudentInput,
    StudentRepository, UpdateEnrolment,
};
use enrolbase::infrastructure::{
    SeaOrmCourseRepository, SeaOrmEnrolmentRepository, SeaOrmStudentRepository,
};
use sea_orm::DatabaseConnection;

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn student_input(name: &str, email: &str, address: &str) -> StudentInput {
    StudentInput {
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    }
}

fn course_input(name: &str, description: &str, credits: i32) -> CourseInput {
    CourseInput {
        name: name.to_string(),
        description: description.to_string(),
        credits,
    }
}

#[tokio::test]
async fn test_add_then_get_student_round_trip() {
    let db = setup_test_db().await;
    let repo = SeaOrmStudentRepository::new(db);

    let created = repo
        .create(student_input("Ana", "ana@x.com", "1 High St"))
        .await
        .expect("Failed to create student");
    assert!(created.id > 0);

    let fetched = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to fetch student")
        .expect("Student should exist");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.email, "ana@x.com");
    assert_eq!(fetched.address, "1 High St");
}

#[tokio::test]
async fn test_get_missing_student_returns_none() {
    let db = setup_test_db().await;
    let repo = SeaOrmStudentRepository::new(db);

    let result = repo.find_by_id(999).await.expect("Query should succeed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_student_copies_fields_and_keeps_id() {
    let db = setup_test_db().await;
    let repo = SeaOrmStudentRepository::new(db);

    let created = repo
        .create(student_input("Ana", "ana@x.com", "1 High St"))
        .await
        .expect("Failed to create student");

    repo.update(
        created.id,
        student_input("Ana Silva", "ana.silva@x.com", "2 Low Rd"),
    )
    .await
    .expect("Failed to update student");

    let fetched = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to fetch student")
        .expect("Student should exist");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Ana Silva");
    assert_eq!(fetched.email, "ana.silva@x.com");
    assert_eq!(fetched.address, "2 Low Rd");
}

#[tokio::test]
async fn test_update_missing_student_is_silent_noop() {
    let db = setup_test_db().await;
    let repo = SeaOrmStudentRepository::new(db);

    repo.create(student_input("Ana", "ana@x.com", ""))
        .await
        .expect("Failed to create student");

    // Id 99 was never inserted: the call must succeed without touching
    // anything and without creating a record.
    repo.update(99, student_input("Ghost", "ghost@x.com", ""))
        .await
        .expect("Update of a missing id must not error");

    let all = repo.find_all().await.expect("Failed to list students");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Ana");
}

#[tokio::test]
async fn test_delete_student_is_idempotent() {
    let db = setup_test_db().await;
    let repo = SeaOrmStudentRepository::new(db);

    let created = repo
        .create(student_input("Ana", "ana@x.com", ""))
        .await
        .expect("Failed to create student");

    repo.delete(created.id).await.expect("First delete failed");
    repo.delete(created.id)
        .await
        .expect("Second delete must be a no-op");
    repo.delete(12345)
        .await
        .expect("Delete of a never-inserted id must be a no-op");

    let all = repo.find_all().await.expect("Failed to list students");
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_course_missing_update_and_delete_are_noops() {
    let db = setup_test_db().await;
    let repo = SeaOrmCourseRepository::new(db);

    repo.create(course_input("CS101", "Intro", 3))
        .await
        .expect("Failed to create course");

    repo.update(42, course_input("Ghost", "Nothing", 0))
        .await
        .expect("Update of a missing id must not error");
    repo.delete(42)
        .await
        .expect("Delete of a missing id must not error");

    let all = repo.find_all().await.expect("Failed to list courses");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "CS101");
    assert_eq!(all[0].description, "Intro");
    assert_eq!(all[0].credits, 3);
}

#[tokio::test]
async fn test_enrolment_round_trip_resolves_display_fields() {
    let db = setup_test_db().await;
    let students = SeaOrmStudentRepository::new(db.clone());
    let courses = SeaOrmCourseRepository::new(db.clone());
    let enrolments = SeaOrmEnrolmentRepository::new(db);

    let ana = students
        .create(student_input("Ana", "ana@x.com", ""))
        .await
        .expect("Failed to create student");
    let cs101 = courses
        .create(course_input("CS101", "Intro", 3))
        .await
        .expect("Failed to create course");

    let created = enrolments
        .create(NewEnrolment {
            student_id: ana.id,
            course_id: cs101.id,
            enrolment_date: "2024-01-10".to_string(),
        })
        .await
        .expect("Failed to create enrolment");

    let fetched = enrolments
        .find_by_id(created.id)
        .await
        .expect("Enrolment should exist");

    assert_eq!(fetched.student_id, ana.id);
    assert_eq!(fetched.course_id, cs101.id);
    assert_eq!(fetched.enrolment_date, "2024-01-10");

    let student = fetched.student.expect("Student should be resolved");
    assert_eq!(student.name, "Ana");
    let course = fetched.course.expect("Course should be resolved");
    assert_eq!(course.name, "CS101");
    assert_eq!(course.description, "Intro");

    let all = enrolments.find_all().await.expect("Failed to list");
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].student.as_ref().map(|s| s.name.as_str()),
        Some("Ana")
    );
    assert_eq!(
        all[0].course.as_ref().map(|c| c.name.as_str()),
        Some("CS101")
    );
}

#[tokio::test]
async fn test_enrolment_missing_id_signals_not_found() {
    let db = setup_test_db().await;
    let repo = SeaOrmEnrolmentRepository::new(db);

    let err = repo.find_by_id(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));

    let err = repo
        .update(UpdateEnrolment {
            id: 999,
            student_id: 1,
            course_id: 1,
            enrolment_date: "2024-01-10".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound));

    let err = repo.delete(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn test_update_after_concurrent_delete_reports_not_found() {
    let db = setup_test_db().await;
    let students = SeaOrmStudentRepository::new(db.clone());
    let courses = SeaOrmCourseRepository::new(db.clone());
    let enrolments = SeaOrmEnrolmentRepository::new(db);

    let ana = students
        .create(student_input("Ana", "ana@x.com", ""))
        .await
        .expect("Failed to create student");
    let cs101 = courses
        .create(course_input("CS101", "Intro", 3))
        .await
        .expect("Failed to create course");

    let created = enrolments
        .create(NewEnrolment {
            student_id: ana.id,
            course_id: cs101.id,
            enrolment_date: "2024-01-10".to_string(),
        })
        .await
        .expect("Failed to create enrolment");

    // The delete wins the race; the stale update must come back as
    // not-found, not succeed or resurrect the record.
    enrolments.delete(created.id).await.expect("Delete failed");

    let err = enrolments
        .update(UpdateEnrolment {
            id: created.id,
            student_id: ana.id,
            course_id: cs101.id,
            enrolment_date: "2024-02-01".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound));

    let all = enrolments.find_all().await.expect("Failed to list");
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_counts_track_inserts_and_deletes() {
    let db = setup_test_db().await;
    let students = SeaOrmStudentRepository::new(db.clone());
    let courses = SeaOrmCourseRepository::new(db.clone());
    let enrolments = SeaOrmEnrolmentRepository::new(db);

    assert_eq!(students.count().await.expect("count"), 0);
    assert_eq!(courses.count().await.expect("count"), 0);
    assert_eq!(enrolments.count().await.expect("count"), 0);

    let ana = students
        .create(student_input("Ana", "ana@x.com", ""))
        .await
        .expect("Failed to create student");
    let cs101 = courses
        .create(course_input("CS101", "Intro", 3))
        .await
        .expect("Failed to create course");
    enrolments
        .create(NewEnrolment {
            student_id: ana.id,
            course_id: cs101.id,
            enrolment_date: "2024-01-10".to_string(),
        })
        .await
        .expect("Failed to create enrolment");

    assert_eq!(students.count().await.expect("count"), 1);
    assert_eq!(courses.count().await.expect("count"), 1);
    assert_eq!(enrolments.count().await.expect("count"), 1);

    students.delete(ana.id).await.expect("Delete failed");
    assert_eq!(students.count().await.expect("count"), 0);
}
