use serde::Serialize;
use ts_rs::TS;

use super::entities::EvaluationItem;

// 同步结果；created_count 以实际写入为准，可能小于提交的新条目数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_item.ts")]
pub struct SyncEvaluationItemsResponse {
    pub created_count: u64,
    pub updated_count: u64,
    pub deleted_count: u64,
    pub items: Vec<EvaluationItem>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_item.ts")]
pub struct EvaluationItemListResponse {
    pub items: Vec<EvaluationItem>,
}
