use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::attendance::requests::{AttendanceListParams, DateRangeParams};
use crate::models::grades::requests::GradeListParams;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(data.into_inner(), &req).await
}

pub async fn get_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(id.0, &req).await
}

pub async fn get_me(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_me(&req).await
}

pub async fn my_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.my_attendance(query.into_inner(), &req).await
}

pub async fn my_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.my_grades(query.into_inner(), &req).await
}

pub async fn my_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.my_assignments(query.into_inner(), &req).await
}

pub async fn attendance_summary(
    req: HttpRequest,
    id: SafeIDI64,
    range: web::Query<DateRangeParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .attendance_summary(id.0, range.into_inner(), &req)
        .await
}

pub async fn grade_summary(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.grade_summary(id.0, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .wrap(middlewares::RequireJWT)
            // 学生本人视图，需在 /{id} 之前注册
            .service(
                web::scope("/me")
                    .wrap(middlewares::RequireRole::new(&UserRole::Student))
                    .route("", web::get().to(get_me))
                    .route("/attendance", web::get().to(my_attendance))
                    .route("/grades", web::get().to(my_grades))
                    .route("/assignments", web::get().to(my_assignments)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_students))
                            .route(
                                web::post()
                                    .to(create_student)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            ),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(get_student))
                            .route(
                                web::put()
                                    .to(update_student)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            )
                            .route(
                                web::delete()
                                    .to(delete_student)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            ),
                    )
                    .route("/{id}/attendance-summary", web::get().to(attendance_summary))
                    .route("/{id}/grade-summary", web::get().to(grade_summary)),
            ),
    );
}
