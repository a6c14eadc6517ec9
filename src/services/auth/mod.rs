pub mod login;
pub mod logout;
pub mod me;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::config::AppConfig;
use crate::models::auth::LoginRequest;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(login::handle_login(self, login_request, request).await)
    }

    // 刷新 access token
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(token::handle_refresh_token(self, request).await)
    }

    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(logout::handle_logout(request).await)
    }

    // 当前用户及关联档案
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(me::handle_me(self, request).await)
    }
}
