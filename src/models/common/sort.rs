use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn is_asc(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}
