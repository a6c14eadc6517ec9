pub mod health;
pub mod settings;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::config::AppConfig;
use crate::storage::Storage;

pub struct SystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl SystemService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 健康检查（无需登录）
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(health::health(self, request).await)
    }

    // 当前生效的系统设置（只读）
    pub async fn get_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(settings::get_settings(self, request).await)
    }
}
