//! 评价项存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::evaluation_items::{ActiveModel, Column, Entity as EvaluationItems};
use crate::errors::{EvalSysError, Result};
use crate::models::evaluation_items::{
    entities::EvaluationItem,
    plan::{EvaluationItemFields, ItemSyncCounts, ItemSyncPlan},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::warn;

impl SeaOrmStorage {
    /// 列出分组内全部评价项，按 ID 升序
    pub async fn list_evaluation_items_by_group_impl(
        &self,
        group_id: i64,
    ) -> Result<Vec<EvaluationItem>> {
        let items = EvaluationItems::find()
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询评价项失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_evaluation_item()).collect())
    }

    /// 执行同步计划：删除 → 更新 → 逐行新建
    pub async fn apply_evaluation_item_plan_impl(
        &self,
        group_id: i64,
        plan: &ItemSyncPlan,
    ) -> Result<ItemSyncCounts> {
        let mut counts = ItemSyncCounts::default();
        let now = chrono::Utc::now().timestamp();

        if !plan.to_delete.is_empty() {
            let result = EvaluationItems::delete_many()
                .filter(Column::GroupId.eq(group_id))
                .filter(Column::Id.is_in(plan.to_delete.iter().copied()))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    EvalSysError::database_operation(format!("删除评价项失败: {e}"))
                })?;
            counts.deleted = result.rows_affected;
        }

        for update in &plan.to_update {
            let model = ActiveModel {
                evaluation_system_id: Set(update.fields.evaluation_system_id),
                evaluation_type_id: Set(update.fields.evaluation_type_id),
                name: Set(update.fields.name.clone()),
                weight: Set(update.fields.weight),
                min_grade: Set(update.fields.min_grade),
                updated_at: Set(now),
                ..Default::default()
            };

            let result = EvaluationItems::update_many()
                .set(model)
                .filter(Column::Id.eq(update.id))
                .filter(Column::GroupId.eq(group_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    // 两条记录互换名称时，逐行更新会先撞上唯一索引
                    if is_unique_violation(&e) {
                        EvalSysError::evaluation_item_exists(format!(
                            "评价项 {} 更新后与分组内其他评价项重名",
                            update.id
                        ))
                    } else {
                        EvalSysError::database_operation(format!(
                            "更新评价项 {} 失败: {e}",
                            update.id
                        ))
                    }
                })?;
            counts.updated += result.rows_affected;
        }

        for fields in &plan.to_create {
            match Self::new_item_model(group_id, fields, now)
                .insert(&self.db)
                .await
            {
                Ok(_) => counts.created += 1,
                // 并发写入导致的唯一冲突只跳过该行
                Err(e) if is_unique_violation(&e) => {
                    warn!(
                        "Skipping evaluation item '{}' (type {}) in group {}: already exists",
                        fields.name, fields.evaluation_type_id, group_id
                    );
                }
                Err(e) => {
                    return Err(EvalSysError::database_operation(format!(
                        "创建评价项失败: {e}"
                    )));
                }
            }
        }

        Ok(counts)
    }

    fn new_item_model(group_id: i64, fields: &EvaluationItemFields, now: i64) -> ActiveModel {
        ActiveModel {
            group_id: Set(group_id),
            evaluation_system_id: Set(fields.evaluation_system_id),
            evaluation_type_id: Set(fields.evaluation_type_id),
            name: Set(fields.name.clone()),
            weight: Set(fields.weight),
            min_grade: Set(fields.min_grade),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}
