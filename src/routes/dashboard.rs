use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn admin(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.admin(&req).await
}

pub async fn teacher(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.teacher(&req).await
}

pub async fn student(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.student(&req).await
}

// 配置路由：每个角色只能访问自己的仪表盘
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/dashboard")
            .wrap(middlewares::RequireJWT)
            .route(
                "/admin",
                web::get()
                    .to(admin)
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
            )
            .route(
                "/teacher",
                web::get()
                    .to(teacher)
                    .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
            )
            .route(
                "/student",
                web::get()
                    .to(student)
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            ),
    );
}
