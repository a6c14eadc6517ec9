use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;
use crate::models::users::entities::UserRole;

define_string_enum! {
    // 面向对象
    #[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
    pub enum Audience {
        All => "all",
        Teachers => "teachers",
        Students => "students",
    }
}

impl Audience {
    /// 某角色可见的受众范围；管理员可见全部
    pub fn visible_to(role: UserRole) -> &'static [Audience] {
        match role {
            UserRole::Admin => Audience::ALL,
            UserRole::Teacher => &[Audience::All, Audience::Teachers],
            UserRole::Student => &[Audience::All, Audience::Students],
        }
    }
}

define_string_enum! {
    // 公告优先级
    #[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
    pub enum AnnouncementPriority {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
}

// 公告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub audience: Audience,
    pub priority: AnnouncementPriority,
    pub author_id: i64,
    pub published_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// 已发布且未过期
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.published_at <= now && self.expires_at.is_none_or(|expires| expires > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn announcement(published_at: DateTime<Utc>, expires_at: Option<DateTime<Utc>>) -> Announcement {
        Announcement {
            id: 1,
            title: "Exam week".into(),
            content: "Timetable attached".into(),
            audience: Audience::All,
            priority: AnnouncementPriority::Normal,
            author_id: 1,
            published_at,
            expires_at,
            created_at: published_at,
            updated_at: published_at,
        }
    }

    #[test]
    fn test_is_active_at() {
        let now = Utc::now();
        assert!(announcement(now - Duration::hours(1), None).is_active_at(now));
        assert!(announcement(now - Duration::hours(1), Some(now + Duration::hours(1))).is_active_at(now));
        assert!(!announcement(now + Duration::hours(1), None).is_active_at(now));
        assert!(!announcement(now - Duration::days(2), Some(now - Duration::days(1))).is_active_at(now));
    }

    #[test]
    fn test_visible_audiences() {
        assert_eq!(Audience::visible_to(UserRole::Admin).len(), 3);
        assert!(Audience::visible_to(UserRole::Student).contains(&Audience::Students));
        assert!(!Audience::visible_to(UserRole::Student).contains(&Audience::Teachers));
    }
}
