use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, not_found, storage_error};

pub async fn delete_class(service: &ClassService, request: &HttpRequest, class_id: i64) -> Reply {
    let storage = service.get_storage(request)?;

    match storage.delete_class(class_id).await {
        Ok(true) => {
            info!("Class {class_id} deleted");
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class deleted successfully")))
        }
        Ok(false) => Err(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Err(storage_error("Class deletion failed", &e, ErrorCode::Conflict)),
    }
}
