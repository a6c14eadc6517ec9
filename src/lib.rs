//! SchoolHub 学校管理平台后端
//!
//! 面向管理员、教师、学生三类账号，提供师生档案、班级与科目、
//! 考勤、成绩、作业、公告和校历活动，以及按角色聚合的仪表盘。
//!
//! 请求自上而下经过：`routes`（路由与中间件）→ `services`（权限与业务规则）
//! → `storage`（`Storage` trait，SeaORM 实现）。`cache` 缓存登录用户，
//! `config` 负责分层配置，`runtime` 处理启动与关闭。

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
