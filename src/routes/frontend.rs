//! 前端静态资源路由
//!
//! 管理后台的构建产物通过 rust-embed 编译进二进制。
//! 非 API 的 GET 请求先查找同名资源，找不到时回退到 `index.html`，
//! 由前端路由接管。`./frontend-custom/` 下的同名文件优先，便于本地调试。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::models::{ApiResponse, ErrorCode};

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct DashboardAssets;

const INDEX_HTML: &str = "index.html";
const CUSTOM_DIR: &str = "./frontend-custom";

/// 带 hash 的产物可长期缓存，入口页面每次都要重新拉取
const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

const MISSING_BUNDLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>SchoolHub</title>
</head>
<body>
    <h1>Dashboard bundle missing</h1>
    <p>Build the frontend and restart the server:</p>
    <pre>cd frontend && bun run build</pre>
</body>
</html>"#;

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

fn content_type(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "webmanifest" => "application/manifest+json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "txt" => "text/plain; charset=utf-8",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}

fn cache_policy(path: &str) -> &'static str {
    match extension(path) {
        "js" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "gif" | "svg"
        | "webp" => IMMUTABLE,
        _ => NO_CACHE,
    }
}

/// API 前缀下的未知路径不能落到 SPA 页面上
fn is_api_path(path: &str) -> bool {
    path == "api" || path.starts_with("api/")
}

fn load(path: &str) -> Option<Vec<u8>> {
    std::fs::read(Path::new(CUSTOM_DIR).join(path))
        .ok()
        .or_else(|| DashboardAssets::get(path).map(|f| f.data.into_owned()))
}

/// 返回实际命中的资源路径与内容
fn resolve(path: &str) -> Option<(&str, Vec<u8>)> {
    // 拒绝目录穿越
    if path.split('/').any(|seg| seg == "..") {
        return load(INDEX_HTML).map(|data| (INDEX_HTML, data));
    }

    if !path.is_empty()
        && let Some(data) = load(path)
    {
        return Some((path, data));
    }

    load(INDEX_HTML).map(|data| (INDEX_HTML, data))
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    if is_api_path(path) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error_empty(
            ErrorCode::NotFound,
            "接口不存在",
        )));
    }

    match resolve(path) {
        Some((served, data)) => Ok(HttpResponse::Ok()
            .content_type(content_type(served))
            .insert_header(("Cache-Control", cache_policy(served)))
            .body(data)),
        None => Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(MISSING_BUNDLE_PAGE)),
    }
}

/// 前端兜底路由，必须最后注册
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            content_type("assets/app.mjs"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(content_type("logo.svg"), "image/svg+xml");
        assert_eq!(content_type("archive.tar"), "application/octet-stream");
    }

    #[test]
    fn test_cache_policy() {
        assert_eq!(cache_policy("assets/index-3f2a.js"), IMMUTABLE);
        assert_eq!(cache_policy("index.html"), NO_CACHE);
        assert_eq!(cache_policy("manifest.json"), NO_CACHE);
    }

    #[test]
    fn test_api_paths_are_not_spa_routes() {
        assert!(is_api_path("api"));
        assert!(is_api_path("api/unknown"));
        assert!(!is_api_path("apiary"));
        assert!(!is_api_path("students/12"));
    }

    #[test]
    fn test_unknown_route_falls_back_to_index() {
        // build.rs 保证 dist 下至少有 index.html
        let (served, _) = resolve("classes/7/attendance").expect("index.html embedded");
        assert_eq!(served, INDEX_HTML);

        let (served, _) = resolve("../Cargo.toml").expect("index.html embedded");
        assert_eq!(served, INDEX_HTML);
    }
}
