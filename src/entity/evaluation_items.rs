//! 评价项实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub group_id: i64,
    pub evaluation_system_id: i64,
    pub evaluation_type_id: i64,
    pub name: String,
    pub weight: f64,
    pub min_grade: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation_item(self) -> crate::models::evaluation_items::entities::EvaluationItem {
        use crate::models::evaluation_items::entities::EvaluationItem;
        use chrono::{DateTime, Utc};

        EvaluationItem {
            id: self.id,
            group_id: self.group_id,
            evaluation_system_id: self.evaluation_system_id,
            evaluation_type_id: self.evaluation_type_id,
            name: self.name,
            weight: self.weight,
            min_grade: self.min_grade,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
