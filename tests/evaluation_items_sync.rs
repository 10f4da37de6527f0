mod common;

use common::{MAX_SYNC_ITEMS, kept_item, memory_storage, new_item};
use rust_evalsys::models::evaluation_items::entities::DesiredEvaluationItem;
use rust_evalsys::services::evaluation_items::{list::list_group_items, sync::sync_group};
use rust_evalsys::storage::Storage;

const GROUP: i64 = 7;

async fn seed(storage: &dyn Storage, items: Vec<DesiredEvaluationItem>) -> Vec<i64> {
    sync_group(storage, GROUP, items, MAX_SYNC_ITEMS)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|item| item.id)
        .collect()
}

#[tokio::test]
async fn creates_items_in_empty_group() {
    let storage = memory_storage().await;

    let result = sync_group(
        storage.as_ref(),
        GROUP,
        vec![new_item("Midterm", 1, 40.0), new_item("Final", 1, 60.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();

    assert_eq!(result.created_count, 2);
    assert_eq!(result.updated_count, 0);
    assert_eq!(result.deleted_count, 0);
    assert_eq!(result.items.len(), 2);
    assert!(result.items.iter().all(|item| item.group_id == GROUP));
}

#[tokio::test]
async fn weight_change_updates_in_place() {
    let storage = memory_storage().await;
    let ids = seed(storage.as_ref(), vec![new_item("Midterm", 1, 40.0)]).await;

    let result = sync_group(
        storage.as_ref(),
        GROUP,
        vec![kept_item(ids[0], "Midterm", 1, 70.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();

    assert_eq!(result.updated_count, 1);
    assert_eq!(result.created_count, 0);
    assert_eq!(result.deleted_count, 0);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].id, ids[0]);
    assert_eq!(result.items[0].weight, 70.0);
}

#[tokio::test]
async fn duplicate_new_items_leave_group_untouched() {
    let storage = memory_storage().await;

    let err = sync_group(
        storage.as_ref(),
        GROUP,
        vec![new_item("A", 1, 50.0), new_item("A", 1, 50.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), "E011");

    let listed = list_group_items(storage.as_ref(), GROUP).await.unwrap();
    assert!(listed.items.is_empty());
}

#[tokio::test]
async fn conflict_does_not_apply_deletes() {
    let storage = memory_storage().await;
    let ids = seed(
        storage.as_ref(),
        vec![new_item("Quiz1", 1, 30.0), new_item("Quiz2", 1, 70.0)],
    )
    .await;

    // Quiz2 不在期望集合中，但冲突发生在任何删除之前
    let err = sync_group(
        storage.as_ref(),
        GROUP,
        vec![kept_item(ids[0], "Quiz1", 1, 30.0), new_item("Quiz1", 1, 10.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict());

    let listed = list_group_items(storage.as_ref(), GROUP).await.unwrap();
    assert_eq!(listed.items.len(), 2);
}

#[tokio::test]
async fn omitted_items_are_deleted_and_kept_items_updated() {
    let storage = memory_storage().await;
    let ids = seed(
        storage.as_ref(),
        vec![new_item("Quiz1", 1, 30.0), new_item("Quiz2", 1, 70.0)],
    )
    .await;

    let result = sync_group(
        storage.as_ref(),
        GROUP,
        vec![kept_item(ids[0], "Quiz1", 1, 50.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();

    assert_eq!(result.deleted_count, 1);
    assert_eq!(result.updated_count, 1);
    assert_eq!(result.created_count, 0);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "Quiz1");
    assert_eq!(result.items[0].weight, 50.0);
}

#[tokio::test]
async fn repeated_sync_is_idempotent() {
    let storage = memory_storage().await;
    let ids = seed(
        storage.as_ref(),
        vec![new_item("Lab", 2, 25.0), new_item("Exam", 1, 75.0)],
    )
    .await;

    let mut graded = kept_item(ids[1], "Exam", 1, 75.0);
    graded.min_grade = Some(5.0);
    let payload = vec![kept_item(ids[0], "Lab", 2, 25.0), graded];

    let first = sync_group(storage.as_ref(), GROUP, payload.clone(), MAX_SYNC_ITEMS)
        .await
        .unwrap();
    assert_eq!(first.updated_count, 1);

    let second = sync_group(storage.as_ref(), GROUP, payload, MAX_SYNC_ITEMS)
        .await
        .unwrap();
    assert_eq!(second.created_count, 0);
    assert_eq!(second.updated_count, 0);
    assert_eq!(second.deleted_count, 0);
    assert_eq!(
        first.items.iter().map(|i| i.id).collect::<Vec<_>>(),
        second.items.iter().map(|i| i.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn listing_matches_payload_after_sync() {
    let storage = memory_storage().await;
    let ids = seed(
        storage.as_ref(),
        vec![new_item("Quiz1", 1, 30.0), new_item("Quiz2", 1, 70.0)],
    )
    .await;

    sync_group(
        storage.as_ref(),
        GROUP,
        vec![
            kept_item(ids[1], "Quiz2 (renamed)", 1, 60.0),
            new_item("Project", 3, 40.0),
        ],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();

    let listed = list_group_items(storage.as_ref(), GROUP).await.unwrap();
    let mut names: Vec<_> = listed.items.iter().map(|i| i.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Project", "Quiz2 (renamed)"]);
    assert!(listed.items.iter().any(|i| i.id == ids[1]));
    assert!(listed.items.iter().all(|i| i.id != ids[0]));
}

#[tokio::test]
async fn omitted_min_grade_is_cleared() {
    let storage = memory_storage().await;
    let mut graded = new_item("Final", 1, 60.0);
    graded.min_grade = Some(4.0);
    let ids = seed(storage.as_ref(), vec![graded]).await;

    let result = sync_group(
        storage.as_ref(),
        GROUP,
        vec![kept_item(ids[0], "Final", 1, 60.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();
    assert_eq!(result.updated_count, 1);
    assert_eq!(result.items[0].min_grade, None);
}

#[tokio::test]
async fn groups_are_isolated() {
    let storage = memory_storage().await;
    let ids = seed(storage.as_ref(), vec![new_item("Midterm", 1, 40.0)]).await;

    // 其他分组的 id 被忽略，不会被移动或修改
    let result = sync_group(
        storage.as_ref(),
        GROUP + 1,
        vec![kept_item(ids[0], "Hijacked", 1, 10.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();
    assert_eq!(result.created_count, 0);
    assert_eq!(result.updated_count, 0);
    assert!(result.items.is_empty());

    let original = list_group_items(storage.as_ref(), GROUP).await.unwrap();
    assert_eq!(original.items.len(), 1);
    assert_eq!(original.items[0].name, "Midterm");

    // 同名同类别在不同分组中互不冲突
    let other = sync_group(
        storage.as_ref(),
        GROUP + 1,
        vec![new_item("Midterm", 1, 40.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();
    assert_eq!(other.created_count, 1);
}

#[tokio::test]
async fn empty_payload_clears_group() {
    let storage = memory_storage().await;
    seed(
        storage.as_ref(),
        vec![new_item("A", 1, 50.0), new_item("B", 1, 50.0)],
    )
    .await;

    let result = sync_group(storage.as_ref(), GROUP, vec![], MAX_SYNC_ITEMS)
        .await
        .unwrap();
    assert_eq!(result.deleted_count, 2);
    assert!(result.items.is_empty());
}

#[tokio::test]
async fn oversized_or_invalid_payload_is_rejected() {
    let storage = memory_storage().await;

    let err = sync_group(
        storage.as_ref(),
        GROUP,
        vec![new_item("A", 1, 50.0), new_item("B", 1, 50.0)],
        1,
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), "E004");

    let err = sync_group(
        storage.as_ref(),
        GROUP,
        vec![kept_item(3, "A", 1, 50.0), kept_item(3, "B", 1, 50.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), "E004");
}

#[tokio::test]
async fn best_effort_insert_skips_rows_that_already_exist() {
    use rust_evalsys::models::evaluation_items::plan::{EvaluationItemFields, ItemSyncPlan};

    let storage = memory_storage().await;
    seed(storage.as_ref(), vec![new_item("Midterm", 1, 40.0)]).await;

    // 模拟并发写入：计划中的一行在落库前已被他人插入
    let plan = ItemSyncPlan {
        to_create: vec![
            EvaluationItemFields {
                evaluation_system_id: 1,
                evaluation_type_id: 1,
                name: "Midterm".to_string(),
                weight: 40.0,
                min_grade: None,
            },
            EvaluationItemFields {
                evaluation_system_id: 1,
                evaluation_type_id: 1,
                name: "Final".to_string(),
                weight: 60.0,
                min_grade: None,
            },
        ],
        ..Default::default()
    };

    let counts = storage
        .apply_evaluation_item_plan(GROUP, &plan)
        .await
        .unwrap();
    assert_eq!(counts.created, 1);

    let listed = list_group_items(storage.as_ref(), GROUP).await.unwrap();
    assert_eq!(listed.items.len(), 2);
}

#[tokio::test]
async fn rename_reuses_key_freed_by_delete() {
    let storage = memory_storage().await;
    let ids = seed(
        storage.as_ref(),
        vec![new_item("A", 1, 50.0), new_item("B", 1, 50.0)],
    )
    .await;

    // A 在同一次调用中先被删除，B 随后改名为 A，不触发唯一索引
    let result = sync_group(
        storage.as_ref(),
        GROUP,
        vec![kept_item(ids[1], "A", 1, 50.0)],
        MAX_SYNC_ITEMS,
    )
    .await
    .unwrap();

    assert_eq!(result.deleted_count, 1);
    assert_eq!(result.updated_count, 1);
    assert_eq!(result.created_count, 0);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].id, ids[1]);
    assert_eq!(result.items[0].name, "A");
}
