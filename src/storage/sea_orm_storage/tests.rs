use super::SeaOrmStorage;
use crate::errors::SchoolHubError;
use crate::models::{
    PaginationQuery, SortOrder,
    announcements::{
        entities::Audience,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest},
    },
    attendance::{
        entities::AttendanceStatus,
        requests::{AttendanceListQuery, AttendanceMark, BatchAttendanceRequest},
    },
    classes::requests::CreateClassRequest,
    events::{
        entities::EventStatus,
        requests::{CreateEventRequest, EventListQuery},
    },
    grades::{entities::GradeLetter, requests::CreateGradeRequest},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, StudentSortBy},
    },
    subjects::requests::CreateSubjectRequest,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::storage::Storage;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::{ConnectOptions, Database};

async fn storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // 内存库每个连接独立，固定为单连接
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    SeaOrmStorage::from_connection(db).await.unwrap()
}

async fn admin(storage: &SeaOrmStorage) -> i64 {
    storage
        .create_user(CreateUserRequest {
            username: "admin".to_string(),
            email: "admin@school.test".to_string(),
            password: "hash".to_string(),
            role: UserRole::Admin,
            display_name: None,
        })
        .await
        .unwrap()
        .id
}

async fn class(storage: &SeaOrmStorage, name: &str, capacity: Option<i32>) -> i64 {
    storage
        .create_class(CreateClassRequest {
            name: name.to_string(),
            grade_level: 7,
            section: None,
            teacher_id: None,
            room: None,
            academic_year: "2025-2026".to_string(),
            capacity,
        })
        .await
        .unwrap()
        .id
}

async fn student(storage: &SeaOrmStorage, code: &str, class_id: Option<i64>) -> Student {
    storage
        .create_student(CreateStudentRequest {
            user_id: None,
            student_code: code.to_string(),
            first_name: format!("First{code}"),
            last_name: format!("Last{code}"),
            email: format!("{code}@school.test"),
            class_id,
            date_of_birth: None,
            gender: None,
            guardian_name: None,
            guardian_phone: None,
            status: None,
            enrolled_on: NaiveDate::from_ymd_opt(2025, 9, 1),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_student_pagination_meta_and_rows() {
    let storage = storage().await;
    for i in 0..23 {
        student(&storage, &format!("S{i:03}"), None).await;
    }

    let query = StudentListQuery {
        pagination: PaginationQuery::new(3, 10),
        sort_by: StudentSortBy::StudentCode,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    let page = storage.list_students_with_pagination(query).await.unwrap();

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.meta.total, 23);
    assert_eq!(page.meta.total_pages, 3);
    assert_eq!(page.items[0].student_code, "S020");

    // 超出范围的页返回空列表，总数不变
    let query = StudentListQuery {
        pagination: PaginationQuery::new(9, 10),
        ..Default::default()
    };
    let page = storage.list_students_with_pagination(query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.meta.total, 23);
}

#[tokio::test]
async fn test_huge_page_returns_empty_page() {
    let storage = storage().await;
    for i in 0..3 {
        student(&storage, &format!("S{i:03}"), None).await;
    }

    let query = StudentListQuery {
        pagination: PaginationQuery::new(i64::MAX, 10),
        ..Default::default()
    };
    let page = storage.list_students_with_pagination(query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.meta.page, i64::MAX);
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn test_student_filters_and_search() {
    let storage = storage().await;
    let class_a = class(&storage, "7A", None).await;
    let class_b = class(&storage, "7B", None).await;
    student(&storage, "A001", Some(class_a)).await;
    student(&storage, "A002", Some(class_a)).await;
    student(&storage, "B001", Some(class_b)).await;

    let query = StudentListQuery {
        pagination: PaginationQuery::new(1, 10),
        class_id: Some(class_a),
        ..Default::default()
    };
    let page = storage.list_students_with_pagination(query).await.unwrap();
    assert_eq!(page.meta.total, 2);

    let query = StudentListQuery {
        pagination: PaginationQuery::new(1, 10),
        search: Some(" B00 ".to_string()),
        ..Default::default()
    };
    let page = storage.list_students_with_pagination(query).await.unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].class_id, Some(class_b));

    // 通配符按字面匹配
    let query = StudentListQuery {
        pagination: PaginationQuery::new(1, 10),
        search: Some("%".to_string()),
        ..Default::default()
    };
    let page = storage.list_students_with_pagination(query).await.unwrap();
    assert_eq!(page.meta.total, 0);
}

#[tokio::test]
async fn test_delete_removes_row_and_unknown_id_is_noop() {
    let storage = storage().await;
    let kept = student(&storage, "K001", None).await;
    let removed = student(&storage, "R001", None).await;

    assert!(storage.delete_student(removed.id).await.unwrap());
    assert!(!storage.delete_student(9999).await.unwrap());

    let page = storage
        .list_students_with_pagination(StudentListQuery {
            pagination: PaginationQuery::new(1, 10),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, kept.id);
}

#[tokio::test]
async fn test_duplicate_code_is_conflict() {
    let storage = storage().await;
    storage
        .create_subject(CreateSubjectRequest {
            code: "MATH".to_string(),
            name: "Mathematics".to_string(),
            description: None,
            credits: None,
            teacher_id: None,
        })
        .await
        .unwrap();

    let err = storage
        .create_subject(CreateSubjectRequest {
            code: "MATH".to_string(),
            name: "Maths again".to_string(),
            description: None,
            credits: Some(2),
            teacher_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::Conflict(_)));
}

#[tokio::test]
async fn test_batch_attendance_upserts_in_place() {
    let storage = storage().await;
    let class_id = class(&storage, "8A", None).await;
    let s1 = student(&storage, "C001", Some(class_id)).await;
    let s2 = student(&storage, "C002", Some(class_id)).await;
    let date = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();

    let first = storage
        .mark_attendance(
            None,
            BatchAttendanceRequest {
                class_id,
                session_date: date,
                records: vec![
                    AttendanceMark {
                        student_id: s1.id,
                        status: AttendanceStatus::Present,
                        remarks: None,
                    },
                    AttendanceMark {
                        student_id: s2.id,
                        status: AttendanceStatus::Absent,
                        remarks: None,
                    },
                ],
            },
        )
        .await
        .unwrap();
    assert_eq!((first.created, first.updated), (2, 0));

    let second = storage
        .mark_attendance(
            None,
            BatchAttendanceRequest {
                class_id,
                session_date: date,
                records: vec![AttendanceMark {
                    student_id: s2.id,
                    status: AttendanceStatus::Late,
                    remarks: Some("bus delay".to_string()),
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!((second.created, second.updated), (0, 1));

    let records = storage
        .list_attendance_records(AttendanceListQuery {
            class_id: Some(class_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    let s2_record = records.iter().find(|r| r.student_id == s2.id).unwrap();
    assert_eq!(s2_record.status, AttendanceStatus::Late);
    assert_eq!(storage.count_attendance_marked(class_id, date).await.unwrap(), 2);
}

#[tokio::test]
async fn test_batch_attendance_rolls_back_on_outsider() {
    let storage = storage().await;
    let class_a = class(&storage, "9A", None).await;
    let class_b = class(&storage, "9B", None).await;
    let inside = student(&storage, "D001", Some(class_a)).await;
    let outside = student(&storage, "D002", Some(class_b)).await;

    let err = storage
        .mark_attendance(
            None,
            BatchAttendanceRequest {
                class_id: class_a,
                session_date: NaiveDate::from_ymd_opt(2025, 10, 7).unwrap(),
                records: vec![
                    AttendanceMark {
                        student_id: inside.id,
                        status: AttendanceStatus::Present,
                        remarks: None,
                    },
                    AttendanceMark {
                        student_id: outside.id,
                        status: AttendanceStatus::Present,
                        remarks: None,
                    },
                ],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::Validation(_)));

    let records = storage
        .list_attendance_records(AttendanceListQuery::default())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_event_status_filter_and_range_overlap() {
    let storage = storage().await;
    let creator = admin(&storage).await;
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    for (title, start, end) in [
        ("past", now - Duration::days(10), now - Duration::days(9)),
        ("live", now - Duration::hours(1), now + Duration::hours(1)),
        ("soon", now + Duration::days(3), now + Duration::days(4)),
    ] {
        storage
            .create_event(
                creator,
                CreateEventRequest {
                    title: title.to_string(),
                    description: None,
                    location: None,
                    start_at: start,
                    end_at: end,
                    audience: None,
                },
            )
            .await
            .unwrap();
    }

    let page = storage
        .list_events_with_pagination(EventListQuery {
            pagination: PaginationQuery::new(1, 10),
            status: Some(EventStatus::Ongoing),
            now,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].title, "live");
    assert_eq!(page.items[0].status, EventStatus::Ongoing);

    // 区间 [now+2d, now+5d] 只与 "soon" 重叠
    let page = storage
        .list_events_with_pagination(EventListQuery {
            pagination: PaginationQuery::new(1, 10),
            range_start: Some(now + Duration::days(2)),
            range_end: Some(now + Duration::days(5)),
            now,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].status, EventStatus::Upcoming);
}

#[tokio::test]
async fn test_announcement_audience_and_active_filter() {
    let storage = storage().await;
    let author = admin(&storage).await;
    let now = Utc::now();

    for (title, audience, expires_at) in [
        ("everyone", Audience::All, None),
        ("staff only", Audience::Teachers, None),
        ("expired", Audience::Students, Some(now - Duration::days(1))),
        ("pupils", Audience::Students, Some(now + Duration::days(1))),
    ] {
        storage
            .create_announcement(
                author,
                CreateAnnouncementRequest {
                    title: title.to_string(),
                    content: "body".to_string(),
                    audience: Some(audience),
                    priority: None,
                    published_at: Some(now - Duration::days(2)),
                    expires_at,
                },
            )
            .await
            .unwrap();
    }

    let page = storage
        .list_announcements_with_pagination(AnnouncementListQuery {
            pagination: PaginationQuery::new(1, 10),
            audiences: Some(Audience::visible_to(UserRole::Student).to_vec()),
            active_at: Some(now),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut titles: Vec<_> = page.items.iter().map(|a| a.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["everyone", "pupils"]);
}

#[tokio::test]
async fn test_grade_percentage_and_letter() {
    let storage = storage().await;
    let s = student(&storage, "G001", None).await;
    let subject = storage
        .create_subject(CreateSubjectRequest {
            code: "SCI".to_string(),
            name: "Science".to_string(),
            description: None,
            credits: Some(3),
            teacher_id: None,
        })
        .await
        .unwrap();

    let grade = storage
        .create_grade(
            None,
            CreateGradeRequest {
                student_id: s.id,
                subject_id: subject.id,
                exam_name: "Quiz 1".to_string(),
                term: Some("T1".to_string()),
                score: 43.0,
                max_score: Some(50.0),
                remarks: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(grade.percentage, 86.0);
    assert_eq!(grade.letter, GradeLetter::A);
    assert_eq!(storage.list_grades_by_student(s.id).await.unwrap().len(), 1);

    // 删除学生级联删除成绩
    assert!(storage.delete_student(s.id).await.unwrap());
    assert!(storage.get_grade_by_id(grade.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_count_entities() {
    let storage = storage().await;
    admin(&storage).await;
    let class_id = class(&storage, "10A", Some(30)).await;
    student(&storage, "E001", Some(class_id)).await;

    let counts = storage.count_entities().await.unwrap();
    assert_eq!(counts.users, 1);
    assert_eq!(counts.classes, 1);
    assert_eq!(counts.students, 1);
    assert_eq!(counts.teachers, 0);
    assert_eq!(storage.count_students_in_class(class_id).await.unwrap(), 1);
}
