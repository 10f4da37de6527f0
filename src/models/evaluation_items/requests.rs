use serde::Deserialize;
use ts_rs::TS;

use super::entities::DesiredEvaluationItem;

// 同步评价项请求：items 为该分组同步后应存在的完整集合
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_item.ts")]
pub struct SyncEvaluationItemsRequest {
    pub items: Vec<DesiredEvaluationItem>,
}
