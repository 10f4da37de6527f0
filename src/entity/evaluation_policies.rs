//! 评价政策实体

use sea_orm::entity::prelude::*;

use crate::models::evaluation_policies::entities::EvaluationPolicy;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_policies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub subject_id: i64,
    // JSON 编码的 Vec<PolicyRule>
    #[sea_orm(column_type = "Text")]
    pub policy_rules: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_policy(self) -> crate::errors::Result<EvaluationPolicy> {
        use chrono::{DateTime, Utc};

        Ok(EvaluationPolicy {
            id: self.id,
            subject_id: self.subject_id,
            policy_rules: serde_json::from_str(&self.policy_rules)?,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
