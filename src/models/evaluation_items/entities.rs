use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_item.ts")]
pub struct EvaluationItem {
    // 评价项ID
    pub id: i64,
    // 所属评分分组ID（分组本身由外部归属服务管理）
    pub group_id: i64,
    // 所属评价体系ID
    pub evaluation_system_id: i64,
    // 评价类别ID
    pub evaluation_type_id: i64,
    // 名称，同一分组内 (name, evaluation_type_id) 唯一
    pub name: String,
    // 在所属类别中的权重 (0, 100]
    pub weight: f64,
    // 最低及格分 [0, 10]
    pub min_grade: Option<f64>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 期望状态中的一项；带 id 表示保留/更新已有记录，不带 id 表示新建
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_item.ts")]
pub struct DesiredEvaluationItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub evaluation_system_id: i64,
    pub evaluation_type_id: i64,
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub min_grade: Option<f64>,
}
