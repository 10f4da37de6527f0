//! 评价政策存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::evaluation_policies::{ActiveModel, Column, Entity as EvaluationPolicies};
use crate::errors::{EvalSysError, Result};
use crate::models::evaluation_policies::entities::{EvaluationPolicy, PolicyRule};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建评价政策
    pub async fn create_evaluation_policy_impl(
        &self,
        subject_id: i64,
        policy_rules: Vec<PolicyRule>,
    ) -> Result<EvaluationPolicy> {
        if self
            .get_evaluation_policy_by_subject_impl(subject_id)
            .await?
            .is_some()
        {
            return Err(EvalSysError::policy_exists(format!(
                "科目 {subject_id} 已存在评价政策"
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            subject_id: Set(subject_id),
            policy_rules: Set(serde_json::to_string(&policy_rules)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // 预检查与插入之间的并发写入由唯一约束兜底
        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                EvalSysError::policy_exists(format!("科目 {subject_id} 已存在评价政策"))
            } else {
                EvalSysError::database_operation(format!("创建评价政策失败: {e}"))
            }
        })?;

        result.into_policy()
    }

    /// 通过 ID 获取评价政策
    pub async fn get_evaluation_policy_by_id_impl(
        &self,
        policy_id: i64,
    ) -> Result<Option<EvaluationPolicy>> {
        let result = EvaluationPolicies::find_by_id(policy_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询评价政策失败: {e}")))?;

        result.map(|m| m.into_policy()).transpose()
    }

    /// 通过科目 ID 获取评价政策
    pub async fn get_evaluation_policy_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<Option<EvaluationPolicy>> {
        let result = EvaluationPolicies::find()
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询评价政策失败: {e}")))?;

        result.map(|m| m.into_policy()).transpose()
    }

    /// 整体替换规则列表
    pub async fn update_evaluation_policy_impl(
        &self,
        policy_id: i64,
        policy_rules: Vec<PolicyRule>,
    ) -> Result<Option<EvaluationPolicy>> {
        let existing = self.get_evaluation_policy_by_id_impl(policy_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(policy_id),
            policy_rules: Set(serde_json::to_string(&policy_rules)?),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("更新评价政策失败: {e}")))?;

        result.into_policy().map(Some)
    }

    /// 删除评价政策
    pub async fn delete_evaluation_policy_impl(&self, policy_id: i64) -> Result<bool> {
        let result = EvaluationPolicies::delete_by_id(policy_id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("删除评价政策失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
