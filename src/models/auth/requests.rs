use serde::Deserialize;
use ts_rs::TS;

/// 登录请求，`identifier` 可以是用户名或邮箱
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    #[serde(alias = "username", alias = "email")]
    pub identifier: String,
    pub password: String,
    // 勾选后 refresh token 使用更长的有效期
    #[serde(default)]
    pub remember_me: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_identifier_aliases() {
        let by_name: LoginRequest =
            serde_json::from_str(r#"{"username":"admin","password":"x"}"#).unwrap();
        assert_eq!(by_name.identifier, "admin");
        assert!(!by_name.remember_me);

        let by_mail: LoginRequest = serde_json::from_str(
            r#"{"email":"t@schoolhub.local","password":"x","remember_me":true}"#,
        )
        .unwrap();
        assert_eq!(by_mail.identifier, "t@schoolhub.local");
        assert!(by_mail.remember_me);
    }
}
