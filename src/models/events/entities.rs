use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::announcements::entities::Audience;
use crate::models::common::enums::define_string_enum;

define_string_enum! {
    // 活动状态（由当前时间与起止时间推导，不落库）
    #[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
    pub enum EventStatus {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
    }
}

impl EventStatus {
    /// now < start 为未开始，start <= now <= end 为进行中，now > end 为已结束
    pub fn classify(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if now < start {
            EventStatus::Upcoming
        } else if now <= end {
            EventStatus::Ongoing
        } else {
            EventStatus::Completed
        }
    }
}

// 校园活动
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub audience: Audience,
    pub created_by: i64,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_classify_event_status() {
        let start = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap();
        let end = start + Duration::hours(3);

        assert_eq!(
            EventStatus::classify(start - Duration::seconds(1), start, end),
            EventStatus::Upcoming
        );
        assert_eq!(EventStatus::classify(start, start, end), EventStatus::Ongoing);
        assert_eq!(
            EventStatus::classify(start + Duration::hours(1), start, end),
            EventStatus::Ongoing
        );
        assert_eq!(EventStatus::classify(end, start, end), EventStatus::Ongoing);
        assert_eq!(
            EventStatus::classify(end + Duration::seconds(1), start, end),
            EventStatus::Completed
        );
    }
}
