//! 评价体系存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::evaluation_systems::{ActiveModel, Column, Entity as EvaluationSystems};
use crate::errors::{EvalSysError, Result};
use crate::models::evaluation_systems::entities::{EvaluationGroup, EvaluationSystem};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建评价体系
    pub async fn create_evaluation_system_impl(
        &self,
        course_id: i64,
        evaluation_groups: Vec<EvaluationGroup>,
    ) -> Result<EvaluationSystem> {
        if self
            .get_evaluation_system_by_course_impl(course_id)
            .await?
            .is_some()
        {
            return Err(EvalSysError::system_exists(format!(
                "课程 {course_id} 已存在评价体系"
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            course_id: Set(course_id),
            evaluation_groups: Set(serde_json::to_string(&evaluation_groups)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // 预检查与插入之间的并发写入由唯一约束兜底
        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                EvalSysError::system_exists(format!("课程 {course_id} 已存在评价体系"))
            } else {
                EvalSysError::database_operation(format!("创建评价体系失败: {e}"))
            }
        })?;

        result.into_system()
    }

    /// 通过 ID 获取评价体系
    pub async fn get_evaluation_system_by_id_impl(
        &self,
        system_id: i64,
    ) -> Result<Option<EvaluationSystem>> {
        let result = EvaluationSystems::find_by_id(system_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询评价体系失败: {e}")))?;

        result.map(|m| m.into_system()).transpose()
    }

    /// 通过课程 ID 获取评价体系
    pub async fn get_evaluation_system_by_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<EvaluationSystem>> {
        let result = EvaluationSystems::find()
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询评价体系失败: {e}")))?;

        result.map(|m| m.into_system()).transpose()
    }

    /// 整体替换权重分组
    pub async fn update_evaluation_system_impl(
        &self,
        system_id: i64,
        evaluation_groups: Vec<EvaluationGroup>,
    ) -> Result<Option<EvaluationSystem>> {
        let existing = self.get_evaluation_system_by_id_impl(system_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(system_id),
            evaluation_groups: Set(serde_json::to_string(&evaluation_groups)?),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("更新评价体系失败: {e}")))?;

        result.into_system().map(Some)
    }

    /// 删除评价体系
    pub async fn delete_evaluation_system_impl(&self, system_id: i64) -> Result<bool> {
        let result = EvaluationSystems::delete_by_id(system_id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("删除评价体系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
