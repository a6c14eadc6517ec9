pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_subjects(
        &self,
        query: SubjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_subjects(self, query, request).await)
    }

    pub async fn create_subject(
        &self,
        data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_subject(self, data, request).await)
    }

    pub async fn get_subject(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(get::get_subject(self, id, request).await)
    }

    pub async fn update_subject(
        &self,
        id: i64,
        data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_subject(self, id, data, request).await)
    }

    pub async fn delete_subject(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(delete::delete_subject(self, id, request).await)
    }
}

/// 学分为 0 到 20 的整数
pub(crate) fn validate_credits(credits: i32) -> Result<(), String> {
    if !(0..=20).contains(&credits) {
        return Err("Credits must be between 0 and 20".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credits() {
        assert!(validate_credits(0).is_ok());
        assert!(validate_credits(4).is_ok());
        assert!(validate_credits(20).is_ok());
        assert!(validate_credits(-1).is_err());
        assert!(validate_credits(21).is_err());
    }
}
