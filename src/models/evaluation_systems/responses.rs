use serde::Serialize;
use ts_rs::TS;

use super::entities::EvaluationSystem;

// 课程评价体系响应（课程流程使用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_system.ts")]
pub struct CourseSystemResponse {
    pub course_id: i64,
    pub system: EvaluationSystem,
}
