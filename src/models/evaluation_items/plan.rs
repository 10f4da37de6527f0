//! 评价项同步计划
//!
//! 由 `services::evaluation_items::reconcile` 计算，由存储层按
//! 删除 → 更新 → 新建 的顺序落库。

/// 待写入的评价项字段
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationItemFields {
    pub evaluation_system_id: i64,
    pub evaluation_type_id: i64,
    pub name: String,
    pub weight: f64,
    pub min_grade: Option<f64>,
}

/// 对已有评价项的原地更新
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationItemUpdate {
    pub id: i64,
    pub fields: EvaluationItemFields,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSyncPlan {
    pub to_delete: Vec<i64>,
    pub to_update: Vec<EvaluationItemUpdate>,
    pub to_create: Vec<EvaluationItemFields>,
    // 字段与存储完全一致、无需写入的记录数
    pub unchanged: usize,
    // 携带了分组中不存在的 id，被忽略的条目
    pub ignored_ids: Vec<i64>,
}

impl ItemSyncPlan {
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_update.is_empty() && self.to_create.is_empty()
    }
}

/// 实际落库的行数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemSyncCounts {
    pub created: u64,
    pub updated: u64,
    pub deleted: u64,
}
