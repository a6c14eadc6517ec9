use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PLACEHOLDER: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SchoolHub</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 560px; margin: 96px auto; padding: 0 16px; }
        .notice { border-left: 4px solid #e0a800; background: #fff8e1; padding: 12px 16px; }
        code { background: #f1f3f4; padding: 2px 6px; border-radius: 4px; }
    </style>
</head>
<body>
    <h1>SchoolHub 学校管理平台</h1>
    <div class="notice">
        <p>管理后台尚未构建，API 仍可正常使用。</p>
        <p>构建前端：<code>cd frontend && bun install && bun run build</code></p>
    </div>
</body>
</html>"#;

fn main() {
    println!("cargo:rerun-if-changed=frontend/dist");

    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") else {
        panic!("CARGO_MANIFEST_DIR is not set");
    };
    let dist = PathBuf::from(manifest_dir).join("frontend/dist");

    // rust-embed 要求目录存在，缺失时写入占位页
    if !dist.join("index.html").exists() {
        println!("cargo:warning=frontend/dist not found, embedding placeholder page");
        if let Err(e) = write_placeholder(&dist) {
            panic!("failed to write placeholder frontend into {}: {e}", dist.display());
        }
    }
}

fn write_placeholder(dist: &Path) -> io::Result<()> {
    fs::create_dir_all(dist.join("assets"))?;
    fs::write(dist.join("index.html"), PLACEHOLDER)?;
    fs::write(dist.join("favicon.ico"), [])
}
