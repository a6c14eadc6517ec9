//! 请求参数校验

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

// 学号、工号、科目代码：字母数字与连字符
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{0,31}$").expect("Invalid code regex"));

const MAX_TEXT_LEN: usize = 200;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 长度 3..=32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 密码策略：至少 8 位，同时包含大写字母、小写字母和数字，且不在常见弱密码表中
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

/// 学号、工号、科目代码
pub fn validate_code(field: &str, code: &str) -> Result<(), String> {
    if !CODE_RE.is_match(code) {
        return Err(format!(
            "{field} must be 1-32 letters, digits or hyphens and start with a letter or digit"
        ));
    }
    Ok(())
}

/// 必填文本：去除首尾空白后非空且不超过长度上限
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(format!("{field} must be at most {MAX_TEXT_LEN} characters"));
    }
    Ok(())
}

/// 日期区间：两端都给出时 from 不能晚于 to
pub fn validate_date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), String> {
    match (from, to) {
        (Some(from), Some(to)) if from > to => {
            Err(format!("Date range is invalid: {from} is after {to}"))
        }
        _ => Ok(()),
    }
}

/// 活动时间：结束不早于开始
pub fn validate_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), String> {
    if end < start {
        return Err("End time must not be earlier than start time".to_string());
    }
    Ok(())
}

/// 分数：满分为正，得分在 0..=满分
pub fn validate_score(score: f64, max_score: f64) -> Result<(), String> {
    if !max_score.is_finite() || max_score <= 0.0 {
        return Err("Max score must be greater than 0".to_string());
    }
    if !score.is_finite() || score < 0.0 || score > max_score {
        return Err(format!("Score must be between 0 and {max_score}"));
    }
    Ok(())
}

/// 班级容量必须为正
pub fn validate_capacity(capacity: i32) -> Result<(), String> {
    if capacity <= 0 {
        return Err("Capacity must be greater than 0".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_username_and_email() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
        assert!(validate_email("t.chen@school.edu").is_ok());
        assert!(validate_email("t.chen@school").is_err());
        assert!(validate_email("a|b@school.edu").is_err());
    }

    #[test]
    fn test_codes() {
        assert!(validate_code("student_code", "S2024-001").is_ok());
        assert!(validate_code("student_code", "-S1").is_err());
        assert!(validate_code("student_code", "").is_err());
        assert!(validate_code("student_code", "S 1").is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required("title", "Sports day").is_ok());
        assert!(validate_required("title", "   ").is_err());
        assert!(validate_required("title", &"x".repeat(201)).is_err());
    }

    #[test]
    fn test_date_range() {
        let d = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        assert!(validate_date_range(Some(d), Some(later)).is_ok());
        assert!(validate_date_range(Some(d), Some(d)).is_ok());
        assert!(validate_date_range(Some(later), Some(d)).is_err());
        assert!(validate_date_range(None, Some(d)).is_ok());
    }

    #[test]
    fn test_time_range() {
        let start = Utc::now();
        assert!(validate_time_range(start, start).is_ok());
        assert!(validate_time_range(start, start + chrono::Duration::hours(1)).is_ok());
        assert!(validate_time_range(start, start - chrono::Duration::seconds(1)).is_err());
    }

    #[test]
    fn test_scores() {
        assert!(validate_score(0.0, 100.0).is_ok());
        assert!(validate_score(100.0, 100.0).is_ok());
        assert!(validate_score(100.5, 100.0).is_err());
        assert!(validate_score(-1.0, 100.0).is_err());
        assert!(validate_score(5.0, 0.0).is_err());
        assert!(validate_score(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn test_capacity() {
        assert!(validate_capacity(30).is_ok());
        assert!(validate_capacity(0).is_err());
    }
}
