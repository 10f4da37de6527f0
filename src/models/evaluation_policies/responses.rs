use serde::Serialize;
use ts_rs::TS;

use super::entities::EvaluationPolicy;

// 科目评价政策响应（科目流程使用，带回反向引用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_policy.ts")]
pub struct SubjectPolicyResponse {
    pub subject_id: i64,
    pub policy: EvaluationPolicy,
}
