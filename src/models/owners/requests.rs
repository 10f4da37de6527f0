use serde::Deserialize;
use ts_rs::TS;

// 登记科目
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/owner.ts")]
pub struct RegisterSubjectRequest {
    pub name: String,
}

// 登记开课实例
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/owner.ts")]
pub struct RegisterCourseRequest {
    pub subject_id: i64,
    pub name: String,
}
