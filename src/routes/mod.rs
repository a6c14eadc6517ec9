pub mod auth;

pub mod users;

pub mod teachers;

pub mod students;

pub mod classes;

pub mod subjects;

pub mod attendance;

pub mod grades;

pub mod assignments;

pub mod announcements;

pub mod events;

pub mod dashboard;

pub mod system;

pub mod frontend;

pub use announcements::configure_announcement_routes;
pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use dashboard::configure_dashboard_routes;
pub use events::configure_event_routes;
pub use frontend::configure_frontend_routes;
pub use grades::configure_grade_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
