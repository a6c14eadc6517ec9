//! 请求体与查询参数的反序列化错误处理

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid JSON body for {}: {}", req.path(), err);

    let (response, message) = match &err {
        JsonPayloadError::ContentType => (
            HttpResponse::UnsupportedMediaType(),
            "Content-Type must be application/json".to_string(),
        ),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => (
            HttpResponse::PayloadTooLarge(),
            "Request body is too large".to_string(),
        ),
        _ => (HttpResponse::BadRequest(), format!("Invalid request body: {err}")),
    };

    build_error(response, message, err)
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid query string for {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    build_error(HttpResponse::BadRequest(), message, err)
}

fn build_error<E>(
    mut builder: actix_web::HttpResponseBuilder,
    message: String,
    cause: E,
) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = builder.json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(cause, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[allow(dead_code)]
        score: f64,
    }

    #[derive(Deserialize)]
    struct Params {
        #[allow(dead_code)]
        page: Option<i64>,
    }

    async fn accept_body(_: web::Json<Body>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn accept_query(_: web::Query<Params>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_bad_inputs_return_json_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .route("/body", web::post().to(accept_body))
                .route("/query", web::get().to(accept_query)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/body")
            .insert_header(("Content-Type", "application/json"))
            .set_payload(r#"{"score":"high"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::BadRequest as i32);

        let req = test::TestRequest::get().uri("/query?page=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
