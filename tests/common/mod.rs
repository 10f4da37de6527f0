#![allow(dead_code)]

use std::sync::Arc;

use rust_evalsys::models::evaluation_items::entities::DesiredEvaluationItem;
use rust_evalsys::models::evaluation_policies::entities::PolicyRule;
use rust_evalsys::models::evaluation_systems::entities::EvaluationGroup;
use rust_evalsys::storage::Storage;
use rust_evalsys::storage::sea_orm_storage::SeaOrmStorage;

pub const MAX_SYNC_ITEMS: usize = 500;

/// 每个测试独占一个迁移完成的内存库
pub async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(
        SeaOrmStorage::in_memory()
            .await
            .expect("in-memory storage should start"),
    )
}

pub fn rule(evaluation_type_id: i64, min: f64, max: f64) -> PolicyRule {
    PolicyRule {
        evaluation_type_id,
        min_percentage: min,
        max_percentage: max,
    }
}

pub fn group(evaluation_type_id: i64, total_weight: f64) -> EvaluationGroup {
    EvaluationGroup {
        evaluation_type_id,
        total_weight,
    }
}

pub fn new_item(name: &str, evaluation_type_id: i64, weight: f64) -> DesiredEvaluationItem {
    DesiredEvaluationItem {
        id: None,
        evaluation_system_id: 1,
        evaluation_type_id,
        name: name.to_string(),
        weight,
        min_grade: None,
    }
}

pub fn kept_item(
    id: i64,
    name: &str,
    evaluation_type_id: i64,
    weight: f64,
) -> DesiredEvaluationItem {
    DesiredEvaluationItem {
        id: Some(id),
        ..new_item(name, evaluation_type_id, weight)
    }
}
