pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_events(
        &self,
        query: EventListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_events(self, query, request).await)
    }

    pub async fn create_event(
        &self,
        data: CreateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_event(self, data, request).await)
    }

    pub async fn get_event(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(get::get_event(self, id, request).await)
    }

    pub async fn update_event(
        &self,
        id: i64,
        data: UpdateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_event(self, id, data, request).await)
    }

    pub async fn delete_event(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(delete::delete_event(self, id, request).await)
    }
}
