use serde::Deserialize;
use ts_rs::TS;

use super::entities::EvaluationGroup;

// 创建评价体系请求
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_system.ts")]
pub struct CreateEvaluationSystemRequest {
    pub course_id: i64,
    pub evaluation_groups: Vec<EvaluationGroup>,
}

// 更新评价体系请求（整体替换）
//
// 课程流程 `/courses/{course_id}/evaluation-system` 的 POST/PUT 也使用该结构
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_system.ts")]
pub struct UpdateEvaluationSystemRequest {
    pub evaluation_groups: Vec<EvaluationGroup>,
}
