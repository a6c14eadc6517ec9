//! 成绩存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery, GradeSortBy, UpdateGradeRequest},
        responses::GradeListResponse,
    },
};
use crate::models::grades::entities::DEFAULT_MAX_SCORE;
use crate::utils::sql::{like_contains, search_term};
use sea_orm::sea_query::Query;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_grade_impl(
        &self,
        graded_by: Option<i64>,
        req: CreateGradeRequest,
    ) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            exam_name: Set(req.exam_name),
            term: Set(req.term),
            score: Set(req.score),
            max_score: Set(req.max_score.unwrap_or(DEFAULT_MAX_SCORE)),
            remarks: Set(req.remarks),
            graded_by: Set(graded_by),
            graded_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("录入成绩失败", e))?;

        Ok(result.into_grade())
    }

    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let mut select = Grades::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(subject_ids) = &query.subject_ids {
            select = select.filter(Column::SubjectId.is_in(subject_ids.iter().copied()));
        }
        // 班级筛选：学生当前所在班级
        if let Some(class_id) = query.class_id {
            select = select.filter(
                Column::StudentId.in_subquery(
                    Query::select()
                        .column(StudentColumn::Id)
                        .from(Students)
                        .and_where(StudentColumn::ClassId.eq(class_id))
                        .to_owned(),
                ),
            );
        }
        if let Some(term) = query.term.as_deref().filter(|t| !t.trim().is_empty()) {
            select = select.filter(Column::Term.eq(term.trim()));
        }
        if let Some(term) = search_term(&query.search) {
            select = select.filter(like_contains(Column::ExamName, term));
        }

        let order = sort_order(query.sort_order);
        select = match query.sort_by {
            GradeSortBy::GradedAt => select.order_by(Column::GradedAt, order),
            GradeSortBy::Score => select.order_by(Column::Score, order),
            GradeSortBy::ExamName => select.order_by(Column::ExamName, order),
        }
        .order_by_asc(Column::Id);

        let (items, total) = fetch_page(&self.db, select, query.pagination, "成绩").await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(|m| m.into_grade()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::SubjectId)
            .order_by_asc(Column::GradedAt)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        if self.get_grade_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(exam_name) = update.exam_name {
            model.exam_name = Set(exam_name);
        }
        if let Some(term) = update.term {
            model.term = Set(Some(term));
        }
        if let Some(score) = update.score {
            model.score = Set(score);
            model.graded_at = Set(now);
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }
        if let Some(remarks) = update.remarks {
            model.remarks = Set(Some(remarks));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新成绩失败", e))?;

        self.get_grade_by_id_impl(id).await
    }

    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除成绩失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
