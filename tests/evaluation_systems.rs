mod common;

use common::{group, memory_storage};
use rust_evalsys::services::evaluation_systems::{
    create::create_system, delete::delete_system, get::get_system, get::get_system_by_course,
    update::update_system,
};

#[tokio::test]
async fn create_and_read_back_groups() {
    let storage = memory_storage().await;

    let created = create_system(storage.as_ref(), 20, vec![group(1, 60.0), group(2, 40.0)])
        .await
        .unwrap();

    let stored = get_system_by_course(storage.as_ref(), 20).await.unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.evaluation_groups, vec![group(1, 60.0), group(2, 40.0)]);

    let by_id = get_system(storage.as_ref(), created.id).await.unwrap();
    assert_eq!(by_id.course_id, 20);
}

#[tokio::test]
async fn second_system_for_course_is_rejected() {
    let storage = memory_storage().await;
    create_system(storage.as_ref(), 20, vec![group(1, 100.0)])
        .await
        .unwrap();

    let err = create_system(storage.as_ref(), 20, vec![group(1, 100.0)])
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E010");
}

#[tokio::test]
async fn store_does_not_check_weight_sum() {
    let storage = memory_storage().await;

    // 合计不为 100 也能保存，政策与合计检查属于课程流程
    let system = create_system(storage.as_ref(), 21, vec![group(1, 30.0)])
        .await
        .unwrap();
    assert_eq!(system.evaluation_groups.len(), 1);
}

#[tokio::test]
async fn field_validation_rejects_bad_groups() {
    let storage = memory_storage().await;

    assert!(create_system(storage.as_ref(), 20, vec![]).await.is_err());
    assert!(
        create_system(storage.as_ref(), 20, vec![group(1, 0.0)])
            .await
            .is_err()
    );
    assert!(
        create_system(storage.as_ref(), 20, vec![group(1, 120.0)])
            .await
            .is_err()
    );
    assert!(get_system_by_course(storage.as_ref(), 20).await.is_err());
}

#[tokio::test]
async fn update_and_delete() {
    let storage = memory_storage().await;
    let created = create_system(storage.as_ref(), 20, vec![group(1, 60.0), group(2, 40.0)])
        .await
        .unwrap();

    let updated = update_system(storage.as_ref(), created.id, vec![group(3, 100.0)])
        .await
        .unwrap();
    assert_eq!(updated.evaluation_groups, vec![group(3, 100.0)]);

    assert!(
        update_system(storage.as_ref(), created.id, vec![])
            .await
            .is_err()
    );

    delete_system(storage.as_ref(), created.id).await.unwrap();
    assert!(
        delete_system(storage.as_ref(), created.id)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        update_system(storage.as_ref(), created.id, vec![group(1, 100.0)])
            .await
            .unwrap_err()
            .is_not_found()
    );
}
