//! 评价体系实体

use sea_orm::entity::prelude::*;

use crate::models::evaluation_systems::entities::EvaluationSystem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_systems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub course_id: i64,
    // JSON 编码的 Vec<EvaluationGroup>
    #[sea_orm(column_type = "Text")]
    pub evaluation_groups: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_system(self) -> crate::errors::Result<EvaluationSystem> {
        use chrono::{DateTime, Utc};

        Ok(EvaluationSystem {
            id: self.id,
            course_id: self.course_id,
            evaluation_groups: serde_json::from_str(&self.evaluation_groups)?,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
