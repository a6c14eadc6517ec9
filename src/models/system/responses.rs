use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

// 健康检查
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub database: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
}

// 前端可读取的系统设置
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemSettingsResponse {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub attendance_rate_decimals: u32,
}
