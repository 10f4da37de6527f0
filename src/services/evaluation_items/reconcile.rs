//! 评价项期望状态对账
//!
//! 纯计算，不访问存储。冲突检测在任何写入之前完成，
//! 因此发现冲突时分组保持原样。

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::errors::{EvalSysError, Result};
use crate::models::evaluation_items::{
    entities::{DesiredEvaluationItem, EvaluationItem},
    plan::{EvaluationItemFields, EvaluationItemUpdate, ItemSyncPlan},
};

/// (name, evaluation_type_id) 的占用方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyClaim {
    // 已存在（或请求声明保留）的记录
    Existing(i64),
    // 本次请求待新建的记录
    Pending,
}

/// 计算把分组从 `existing` 变为 `desired` 所需的删除、更新与新建
pub fn plan_item_sync(
    group_id: i64,
    existing: &[EvaluationItem],
    desired: &[DesiredEvaluationItem],
) -> Result<ItemSyncPlan> {
    let desired_ids: HashSet<i64> = desired.iter().filter_map(|item| item.id).collect();
    let existing_by_id: HashMap<i64, &EvaluationItem> =
        existing.iter().map(|item| (item.id, item)).collect();

    let mut plan = ItemSyncPlan::default();
    let mut claims: HashMap<(&str, i64), KeyClaim> = HashMap::with_capacity(desired.len());

    // 保留下来的记录先占住各自当前的键
    for item in existing {
        if desired_ids.contains(&item.id) {
            claims.insert(
                (item.name.as_str(), item.evaluation_type_id),
                KeyClaim::Existing(item.id),
            );
        } else {
            plan.to_delete.push(item.id);
        }
    }

    for entry in desired {
        let key = (entry.name.as_str(), entry.evaluation_type_id);
        let claim = entry.id.map_or(KeyClaim::Pending, KeyClaim::Existing);

        match claims.get(&key) {
            None => {
                claims.insert(key, claim);
            }
            // 带 id 的条目可以重申自己已占有的键
            Some(current) if claim != KeyClaim::Pending && *current == claim => {}
            Some(_) => {
                return Err(EvalSysError::evaluation_item_exists(format!(
                    "Evaluation item '{}' with type {} appears more than once in group {}",
                    entry.name, entry.evaluation_type_id, group_id
                )));
            }
        }

        let fields = EvaluationItemFields {
            evaluation_system_id: entry.evaluation_system_id,
            evaluation_type_id: entry.evaluation_type_id,
            name: entry.name.clone(),
            weight: entry.weight,
            min_grade: entry.min_grade,
        };

        match entry.id {
            None => plan.to_create.push(fields),
            Some(id) => match existing_by_id.get(&id) {
                Some(stored) if stored_matches(stored, &fields) => plan.unchanged += 1,
                Some(_) => plan.to_update.push(EvaluationItemUpdate { id, fields }),
                None => {
                    warn!(
                        "Ignoring evaluation item id {} in sync of group {}: not part of the group",
                        id, group_id
                    );
                    plan.ignored_ids.push(id);
                }
            },
        }
    }

    Ok(plan)
}

fn stored_matches(stored: &EvaluationItem, fields: &EvaluationItemFields) -> bool {
    stored.evaluation_system_id == fields.evaluation_system_id
        && stored.evaluation_type_id == fields.evaluation_type_id
        && stored.name == fields.name
        && stored.weight == fields.weight
        && stored.min_grade == fields.min_grade
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, name: &str, type_id: i64, weight: f64) -> EvaluationItem {
        EvaluationItem {
            id,
            group_id: 9,
            evaluation_system_id: 1,
            evaluation_type_id: type_id,
            name: name.to_string(),
            weight,
            min_grade: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn desired(id: Option<i64>, name: &str, type_id: i64, weight: f64) -> DesiredEvaluationItem {
        DesiredEvaluationItem {
            id,
            evaluation_system_id: 1,
            evaluation_type_id: type_id,
            name: name.to_string(),
            weight,
            min_grade: None,
        }
    }

    #[test]
    fn test_empty_group_creates_everything() {
        let plan = plan_item_sync(
            9,
            &[],
            &[desired(None, "Midterm", 1, 40.0), desired(None, "Final", 1, 60.0)],
        )
        .unwrap();
        assert_eq!(plan.to_create.len(), 2);
        assert!(plan.to_delete.is_empty());
        assert!(plan.to_update.is_empty());
    }

    #[test]
    fn test_weight_change_is_an_update() {
        let plan = plan_item_sync(
            9,
            &[stored(1, "Midterm", 1, 40.0)],
            &[desired(Some(1), "Midterm", 1, 70.0)],
        )
        .unwrap();
        assert_eq!(plan.to_update.len(), 1);
        assert_eq!(plan.to_update[0].id, 1);
        assert_eq!(plan.to_update[0].fields.weight, 70.0);
        assert_eq!(plan.unchanged, 0);
    }

    #[test]
    fn test_identical_entry_is_unchanged() {
        let plan = plan_item_sync(
            9,
            &[stored(1, "Midterm", 1, 40.0)],
            &[desired(Some(1), "Midterm", 1, 40.0)],
        )
        .unwrap();
        assert!(plan.is_noop());
        assert_eq!(plan.unchanged, 1);
    }

    #[test]
    fn test_clearing_min_grade_is_an_update() {
        let mut graded = stored(1, "Final", 1, 60.0);
        graded.min_grade = Some(5.0);
        let plan = plan_item_sync(9, &[graded], &[desired(Some(1), "Final", 1, 60.0)]).unwrap();
        assert_eq!(plan.to_update.len(), 1);
        assert_eq!(plan.to_update[0].fields.min_grade, None);
    }

    #[test]
    fn test_missing_ids_are_deleted() {
        let plan = plan_item_sync(
            9,
            &[stored(1, "Quiz1", 1, 30.0), stored(2, "Quiz2", 1, 70.0)],
            &[desired(Some(1), "Quiz1", 1, 50.0)],
        )
        .unwrap();
        assert_eq!(plan.to_delete, vec![2]);
        assert_eq!(plan.to_update.len(), 1);
        assert!(plan.to_create.is_empty());
    }

    #[test]
    fn test_two_new_entries_with_same_key_conflict() {
        let err = plan_item_sync(
            9,
            &[],
            &[desired(None, "A", 1, 50.0), desired(None, "A", 1, 50.0)],
        )
        .unwrap_err();
        assert_eq!(err.code(), "E011");
    }

    #[test]
    fn test_same_name_different_type_is_allowed() {
        let plan = plan_item_sync(
            9,
            &[],
            &[desired(None, "Lab", 1, 50.0), desired(None, "Lab", 2, 50.0)],
        )
        .unwrap();
        assert_eq!(plan.to_create.len(), 2);
    }

    #[test]
    fn test_new_entry_cannot_take_kept_key() {
        let err = plan_item_sync(
            9,
            &[stored(1, "Midterm", 1, 40.0)],
            &[desired(Some(1), "Midterm", 1, 40.0), desired(None, "Midterm", 1, 10.0)],
        )
        .unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_new_entry_may_reuse_key_of_deleted_item() {
        let plan = plan_item_sync(
            9,
            &[stored(1, "Midterm", 1, 40.0)],
            &[desired(None, "Midterm", 1, 40.0)],
        )
        .unwrap();
        assert_eq!(plan.to_delete, vec![1]);
        assert_eq!(plan.to_create.len(), 1);
    }

    #[test]
    fn test_rename_onto_key_of_other_kept_item_conflicts() {
        let result = plan_item_sync(
            9,
            &[stored(1, "A", 1, 50.0), stored(2, "B", 1, 50.0)],
            &[desired(Some(1), "B", 1, 50.0), desired(Some(2), "A", 1, 50.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_id_is_ignored_but_claims_key() {
        let plan = plan_item_sync(9, &[], &[desired(Some(77), "Essay", 3, 20.0)]).unwrap();
        assert!(plan.is_noop());
        assert_eq!(plan.ignored_ids, vec![77]);

        let err = plan_item_sync(
            9,
            &[],
            &[desired(Some(77), "Essay", 3, 20.0), desired(None, "Essay", 3, 20.0)],
        )
        .unwrap_err();
        assert!(err.is_conflict());
    }
}
