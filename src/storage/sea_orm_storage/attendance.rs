//! 考勤存储操作

use std::collections::HashSet;

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::entity::format_date;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceListQuery, BatchAttendanceRequest, UpdateAttendanceRequest},
        responses::{AttendanceListResponse, BatchAttendanceResponse},
    },
};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set, TransactionTrait,
};
use tracing::debug;

/// 按筛选条件构建查询（分页与统计共用）
fn filtered(query: &AttendanceListQuery) -> Select<Attendance> {
    let mut select = Attendance::find();

    if let Some(class_id) = query.class_id {
        select = select.filter(Column::ClassId.eq(class_id));
    }
    if let Some(class_ids) = &query.class_ids {
        select = select.filter(Column::ClassId.is_in(class_ids.iter().copied()));
    }
    if let Some(student_id) = query.student_id {
        select = select.filter(Column::StudentId.eq(student_id));
    }
    if let Some(status) = query.status {
        select = select.filter(Column::Status.eq(status.as_str()));
    }
    // 日期以 YYYY-MM-DD 文本存储，字典序与时间顺序一致
    if let Some(from) = query.from {
        select = select.filter(Column::SessionDate.gte(format_date(from)));
    }
    if let Some(to) = query.to {
        select = select.filter(Column::SessionDate.lte(format_date(to)));
    }

    select
}

impl SeaOrmStorage {
    /// 批量点名
    ///
    /// 在一个事务内完成：校验学生均属于该班级，再逐条插入或更新
    /// (student_id, class_id, session_date) 对应的记录。任一步失败整体回滚。
    pub async fn mark_attendance_impl(
        &self,
        recorded_by: Option<i64>,
        batch: BatchAttendanceRequest,
    ) -> Result<BatchAttendanceResponse> {
        // 批次内学生去重由服务层 `find_duplicate` 保证
        let student_ids: HashSet<i64> = batch.records.iter().map(|mark| mark.student_id).collect();

        let session_date = format_date(batch.session_date);
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let member_ids: HashSet<i64> = Students::find()
            .filter(StudentColumn::ClassId.eq(batch.class_id))
            .filter(StudentColumn::Id.is_in(student_ids.iter().copied()))
            .all(&txn)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询班级学生失败: {e}")))?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut outsiders: Vec<i64> = student_ids.difference(&member_ids).copied().collect();
        if !outsiders.is_empty() {
            outsiders.sort_unstable();
            return Err(SchoolHubError::validation(format!(
                "以下学生不属于班级 {}: {:?}",
                batch.class_id, outsiders
            )));
        }

        let mut created = 0;
        let mut updated = 0;
        let mut records = Vec::with_capacity(batch.records.len());

        for mark in batch.records {
            let existing = Attendance::find()
                .filter(Column::StudentId.eq(mark.student_id))
                .filter(Column::ClassId.eq(batch.class_id))
                .filter(Column::SessionDate.eq(session_date.as_str()))
                .one(&txn)
                .await
                .map_err(|e| SchoolHubError::database_operation(format!("查询考勤失败: {e}")))?;

            let saved = match existing {
                Some(model) => {
                    let mut active: ActiveModel = model.into();
                    active.status = Set(mark.status.to_string());
                    active.remarks = Set(mark.remarks);
                    active.recorded_by = Set(recorded_by);
                    active.updated_at = Set(now);
                    updated += 1;
                    active
                        .update(&txn)
                        .await
                        .map_err(|e| db_error("更新考勤失败", e))?
                }
                None => {
                    let active = ActiveModel {
                        student_id: Set(mark.student_id),
                        class_id: Set(batch.class_id),
                        session_date: Set(session_date.clone()),
                        status: Set(mark.status.to_string()),
                        remarks: Set(mark.remarks),
                        recorded_by: Set(recorded_by),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    created += 1;
                    active
                        .insert(&txn)
                        .await
                        .map_err(|e| db_error("写入考勤失败", e))?
                }
            };
            records.push(saved.into_record());
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        debug!(
            "班级 {} {} 点名完成: 新增 {created}, 更新 {updated}",
            batch.class_id, session_date
        );

        Ok(BatchAttendanceResponse {
            class_id: batch.class_id,
            session_date: batch.session_date,
            created,
            updated,
            records,
        })
    }

    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let result = Attendance::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_record()))
    }

    /// 分页列出考勤记录，按日期排序
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let select = filtered(&query)
            .order_by(Column::SessionDate, sort_order(query.sort_order))
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::Id);

        let (items, total) = fetch_page(&self.db, select, query.pagination, "考勤").await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(|m| m.into_record()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn list_attendance_records_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        let records = filtered(&query)
            .order_by_asc(Column::SessionDate)
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }

    pub async fn count_attendance_marked_impl(
        &self,
        class_id: i64,
        session_date: NaiveDate,
    ) -> Result<u64> {
        Attendance::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::SessionDate.eq(format_date(session_date)))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计考勤失败: {e}")))
    }

    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        if self.get_attendance_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(remarks) = update.remarks {
            model.remarks = Set(Some(remarks));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新考勤失败", e))?;

        self.get_attendance_by_id_impl(id).await
    }

    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = Attendance::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除考勤失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
