use actix_web::{HttpRequest, HttpResponse};

use super::SystemService;
use crate::models::{ApiResponse, system::responses::SystemSettingsResponse};
use crate::services::context::Reply;

/// 获取系统设置（只读）
pub async fn get_settings(service: &SystemService, _req: &HttpRequest) -> Reply {
    let config = service.get_config();

    let response = SystemSettingsResponse {
        system_name: config.app.system_name.clone(),
        environment: config.app.environment.clone(),
        log_level: config.app.log_level.clone(),
        default_page_size: config.pagination.default_limit,
        max_page_size: config.pagination.max_limit,
        attendance_rate_decimals: config.attendance.rate_decimals,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Settings retrieved successfully",
    )))
}
