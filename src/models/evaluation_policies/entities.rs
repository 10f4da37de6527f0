use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单个评价类别的允许百分比区间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_policy.ts")]
pub struct PolicyRule {
    pub evaluation_type_id: i64,
    pub min_percentage: f64,
    pub max_percentage: f64,
}

impl PolicyRule {
    pub fn admits(&self, weight: f64) -> bool {
        weight >= self.min_percentage && weight <= self.max_percentage
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_policy.ts")]
pub struct EvaluationPolicy {
    // 政策ID
    pub id: i64,
    // 所属科目ID（唯一）
    pub subject_id: i64,
    // 规则列表（有序）
    pub policy_rules: Vec<PolicyRule>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EvaluationPolicy {
    /// 查找某评价类别的规则；同一类别出现多条时取第一条
    pub fn rule_for(&self, evaluation_type_id: i64) -> Option<&PolicyRule> {
        self.policy_rules
            .iter()
            .find(|rule| rule.evaluation_type_id == evaluation_type_id)
    }
}
