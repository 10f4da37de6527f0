use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 某评价类别在课程中的总权重
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_system.ts")]
pub struct EvaluationGroup {
    pub evaluation_type_id: i64,
    pub total_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_system.ts")]
pub struct EvaluationSystem {
    // 体系ID
    pub id: i64,
    // 所属课程ID（唯一）
    pub course_id: i64,
    // 各评价类别权重
    pub evaluation_groups: Vec<EvaluationGroup>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
