use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目（归属服务记录的投影），持有指向评价政策的反向引用
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/owner.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub evaluation_policy_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 开课实例，持有指向评价体系的反向引用
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/owner.ts")]
pub struct Course {
    pub id: i64,
    pub subject_id: i64,
    pub name: String,
    pub evaluation_system_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
