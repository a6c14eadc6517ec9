//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间戳以 Unix 秒存储，日历日期以 `YYYY-MM-DD` 文本存储。

pub mod prelude;

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod classes;
pub mod events;
pub mod grades;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

use chrono::{DateTime, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

pub(crate) fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap_or_default()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_text_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_date(date), "2025-03-09");
        assert_eq!(parse_date("2025-03-09"), date);
    }

    #[test]
    fn test_timestamp_conversion() {
        assert_eq!(to_datetime(0), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(to_datetime(86_400).timestamp(), 86_400);
    }
}
