use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SchoolHubError;
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 由内部错误生成响应体，校验类错误保留原始信息
    pub fn from_error(err: &SchoolHubError) -> Self {
        let code = match err {
            SchoolHubError::Validation(_) | SchoolHubError::DateParse(_) => {
                ErrorCode::ValidationFailed
            }
            SchoolHubError::NotFound(_) => ErrorCode::NotFound,
            SchoolHubError::Conflict(_) => ErrorCode::Conflict,
            SchoolHubError::Authentication(_) => ErrorCode::Unauthorized,
            SchoolHubError::Authorization(_) => ErrorCode::Forbidden,
            _ => ErrorCode::InternalServerError,
        };
        Self::error_empty(code, err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_empty_omits_data() {
        let json = serde_json::to_value(ApiResponse::success_empty("ok")).unwrap();
        assert_eq!(json["code"], 0);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_from_error_maps_codes() {
        let resp = ApiResponse::from_error(&SchoolHubError::validation("bad date"));
        assert_eq!(resp.code, ErrorCode::ValidationFailed as i32);
        assert_eq!(resp.message, "bad date");

        let resp = ApiResponse::from_error(&SchoolHubError::database_operation("boom"));
        assert_eq!(resp.code, ErrorCode::InternalServerError as i32);
    }
}
