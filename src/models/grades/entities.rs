use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::stats::{percentage, round_to};

/// 未指定满分时的默认值
pub const DEFAULT_MAX_SCORE: f64 = 100.0;

// 成绩等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradeLetter {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl GradeLetter {
    /// 按百分比划分等级：90/80/70/60/50 为分界
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            GradeLetter::APlus
        } else if pct >= 80.0 {
            GradeLetter::A
        } else if pct >= 70.0 {
            GradeLetter::B
        } else if pct >= 60.0 {
            GradeLetter::C
        } else if pct >= 50.0 {
            GradeLetter::D
        } else {
            GradeLetter::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLetter::APlus => "A+",
            GradeLetter::A => "A",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::D => "D",
            GradeLetter::F => "F",
        }
    }
}

impl std::fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 得分百分比，保留两位小数
pub fn score_percentage(score: f64, max_score: f64) -> f64 {
    round_to(percentage(score, max_score), 2)
}

// 成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub exam_name: String,
    pub term: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub letter: GradeLetter,
    pub remarks: Option<String>,
    pub graded_by: Option<i64>,
    pub graded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 单科汇总
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SubjectGradeSummary {
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub grade_count: i64,
    pub average_percentage: f64,
    pub letter: GradeLetter,
}

// 学生成绩汇总
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeSummary {
    pub student_id: i64,
    pub subjects: Vec<SubjectGradeSummary>,
    pub grade_count: i64,
    // 没有任何成绩时为空
    pub overall_percentage: Option<f64>,
    pub overall_letter: Option<GradeLetter>,
}

impl GradeSummary {
    /// 由成绩列表汇总；总评按全部成绩的百分比取平均
    ///
    /// `subject_name` 用于补充科目名称，查不到时留空。
    pub fn from_grades(
        student_id: i64,
        grades: &[Grade],
        subject_name: impl Fn(i64) -> Option<String>,
    ) -> Self {
        let mut buckets: Vec<(i64, Vec<f64>)> = Vec::new();
        for grade in grades {
            match buckets.iter_mut().find(|(id, _)| *id == grade.subject_id) {
                Some((_, values)) => values.push(grade.percentage),
                None => buckets.push((grade.subject_id, vec![grade.percentage])),
            }
        }
        buckets.sort_by_key(|(id, _)| *id);

        let subjects = buckets
            .into_iter()
            .map(|(subject_id, values)| {
                let avg = round_to(mean(&values), 2);
                SubjectGradeSummary {
                    subject_id,
                    subject_name: subject_name(subject_id),
                    grade_count: values.len() as i64,
                    average_percentage: avg,
                    letter: GradeLetter::from_percentage(avg),
                }
            })
            .collect();

        let overall = if grades.is_empty() {
            None
        } else {
            let all: Vec<f64> = grades.iter().map(|g| g.percentage).collect();
            Some(round_to(mean(&all), 2))
        };

        Self {
            student_id,
            subjects,
            grade_count: grades.len() as i64,
            overall_percentage: overall,
            overall_letter: overall.map(GradeLetter::from_percentage),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(subject_id: i64, score: f64, max_score: f64) -> Grade {
        let pct = score_percentage(score, max_score);
        Grade {
            id: 0,
            student_id: 1,
            subject_id,
            exam_name: "Midterm".to_string(),
            term: None,
            score,
            max_score,
            percentage: pct,
            letter: GradeLetter::from_percentage(pct),
            remarks: None,
            graded_by: None,
            graded_at: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_letter_ladder_boundaries() {
        assert_eq!(GradeLetter::from_percentage(100.0), GradeLetter::APlus);
        assert_eq!(GradeLetter::from_percentage(90.0), GradeLetter::APlus);
        assert_eq!(GradeLetter::from_percentage(89.99), GradeLetter::A);
        assert_eq!(GradeLetter::from_percentage(80.0), GradeLetter::A);
        assert_eq!(GradeLetter::from_percentage(70.0), GradeLetter::B);
        assert_eq!(GradeLetter::from_percentage(60.0), GradeLetter::C);
        assert_eq!(GradeLetter::from_percentage(50.0), GradeLetter::D);
        assert_eq!(GradeLetter::from_percentage(49.99), GradeLetter::F);
        assert_eq!(GradeLetter::from_percentage(0.0), GradeLetter::F);
    }

    #[test]
    fn test_letter_serializes_plus_sign() {
        assert_eq!(serde_json::to_string(&GradeLetter::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&GradeLetter::C).unwrap(), "\"C\"");
    }

    #[test]
    fn test_score_percentage_rounds() {
        assert_eq!(score_percentage(2.0, 3.0), 66.67);
        assert_eq!(score_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_summary_groups_by_subject() {
        let grades = vec![grade(2, 90.0, 100.0), grade(1, 40.0, 50.0), grade(2, 70.0, 100.0)];
        let summary = GradeSummary::from_grades(1, &grades, |id| Some(format!("S{id}")));

        assert_eq!(summary.grade_count, 3);
        assert_eq!(summary.subjects.len(), 2);
        assert_eq!(summary.subjects[0].subject_id, 1);
        assert_eq!(summary.subjects[0].average_percentage, 80.0);
        assert_eq!(summary.subjects[1].average_percentage, 80.0);
        assert_eq!(summary.subjects[1].grade_count, 2);
        assert_eq!(summary.subjects[1].subject_name.as_deref(), Some("S2"));
        assert_eq!(summary.overall_percentage, Some(80.0));
        assert_eq!(summary.overall_letter, Some(GradeLetter::A));
    }

    #[test]
    fn test_summary_without_grades() {
        let summary = GradeSummary::from_grades(7, &[], |_| None);
        assert!(summary.subjects.is_empty());
        assert_eq!(summary.overall_percentage, None);
        assert_eq!(summary.overall_letter, None);
    }
}
