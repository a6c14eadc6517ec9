use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

// 分页查询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        alias = "size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

impl PaginationQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// 由请求中的可选字段组装，未提供的每页条数留 0，由 `normalized` 填充
    pub fn from_parts(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(0),
        }
    }

    /// 规范化：页码至少为 1；每页条数非正时取 `default_limit`，再限制在 `1..=max_limit`
    pub fn normalized(self, default_limit: i64, max_limit: i64) -> Self {
        let limit = if self.limit <= 0 {
            default_limit
        } else {
            self.limit
        };
        Self {
            page: self.page.max(1),
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    /// 当前页的偏移量 (page - 1) * limit，溢出时为 `None`
    pub fn offset(&self) -> Option<u64> {
        (self.page.max(1) - 1)
            .checked_mul(self.limit.max(1))
            .map(|offset| offset as u64)
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

// 分页元信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(query: PaginationQuery, total: u64) -> Self {
        let limit = query.limit.max(1);
        let total = total as i64;
        Self {
            page: query.page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T: TS> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, query: PaginationQuery, total: u64) -> Self {
        Self {
            items,
            meta: PaginationMeta::new(query, total),
        }
    }

    pub fn map<U: TS>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        assert_eq!(PaginationQuery::new(1, 10).offset(), Some(0));
        assert_eq!(PaginationQuery::new(3, 10).offset(), Some(20));
        assert_eq!(PaginationQuery::new(2, 25).offset(), Some(25));
    }

    #[test]
    fn test_offset_of_huge_page_does_not_overflow() {
        let query = PaginationQuery::new(i64::MAX, 100).normalized(10, 100);
        assert_eq!(query.page, i64::MAX);
        assert_eq!(query.offset(), None);
        assert_eq!(PaginationQuery::new(i64::MAX, 1).offset(), Some(i64::MAX as u64 - 1));
    }

    #[test]
    fn test_normalized_clamps_page_and_limit() {
        assert_eq!(
            PaginationQuery::new(0, 500).normalized(10, 100),
            PaginationQuery::new(1, 100)
        );
        assert_eq!(
            PaginationQuery::new(-4, 0).normalized(10, 100),
            PaginationQuery::new(1, 10)
        );
        assert_eq!(
            PaginationQuery::new(7, 20).normalized(10, 100),
            PaginationQuery::new(7, 20)
        );
        assert_eq!(
            PaginationQuery::from_parts(None, None).normalized(25, 100),
            PaginationQuery::new(1, 25)
        );
    }

    #[test]
    fn test_meta_total_pages_rounds_up() {
        let meta = PaginationMeta::new(PaginationQuery::new(1, 10), 21);
        assert_eq!(meta.total_pages, 3);
        let meta = PaginationMeta::new(PaginationQuery::new(1, 10), 20);
        assert_eq!(meta.total_pages, 2);
        let meta = PaginationMeta::new(PaginationQuery::new(1, 10), 0);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PaginationMeta::new(PaginationQuery::new(2, 5), 11);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["limit"], 5);
        assert!(json.get("total_pages").is_none());
    }

    #[test]
    fn test_query_accepts_numeric_strings() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page":"3","size":"15"}"#).unwrap();
        assert_eq!(query, PaginationQuery::new(3, 15));

        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, PaginationQuery::default());
    }
}
