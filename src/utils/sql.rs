//! SQL 辅助函数

use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition};

/// 转义 LIKE 模式中的通配符（`%`、`_`）及转义符本身
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `column LIKE '%term%' ESCAPE '\'`，用户输入中的通配符按字面匹配
pub fn like_contains<C: ColumnTrait>(column: C, term: &str) -> Condition {
    let pattern = LikeExpr::new(format!("%{}%", escape_like_pattern(term))).escape('\\');
    Condition::all().add(column.like(pattern))
}

/// 规范化搜索关键字：去除首尾空白，空串视为未提供
pub fn search_term(search: &Option<String>) -> Option<&str> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("math"), "math");
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_search_term() {
        assert_eq!(search_term(&Some("  alice ".to_string())), Some("alice"));
        assert_eq!(search_term(&Some("   ".to_string())), None);
        assert_eq!(search_term(&None), None);
    }
}
