use serde::Deserialize;
use ts_rs::TS;

use super::entities::PolicyRule;

// 创建评价政策请求
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_policy.ts")]
pub struct CreateEvaluationPolicyRequest {
    pub subject_id: i64,
    pub policy_rules: Vec<PolicyRule>,
}

// 更新评价政策请求（整体替换规则列表）
//
// 同样用于科目流程 `POST /subjects/{subject_id}/evaluation-policy`
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_policy.ts")]
pub struct UpdateEvaluationPolicyRequest {
    pub policy_rules: Vec<PolicyRule>,
}
