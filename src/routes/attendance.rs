use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceListParams, AttendanceSummaryParams, BatchAttendanceRequest,
    UpdateAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(query.into_inner(), &req)
        .await
}

pub async fn mark_attendance(
    req: HttpRequest,
    data: web::Json<BatchAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(data.into_inner(), &req)
        .await
}

pub async fn class_summary(
    req: HttpRequest,
    query: web::Query<AttendanceSummaryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .class_summary(query.into_inner(), &req)
        .await
}

pub async fn update_attendance(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_attendance(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.delete_attendance(id.0, &req).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teachers/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_attendance))
                            .route(
                                web::post()
                                    .to(mark_attendance)
                                    .wrap(middlewares::RateLimit::attendance_batch()),
                            ),
                    )
                    // /summary 必须在 /{id} 之前
                    .route("/summary", web::get().to(class_summary))
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(update_attendance))
                            .route(web::delete().to(delete_attendance)),
                    ),
            ),
    );
}
