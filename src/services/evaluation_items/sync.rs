use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationItemService;
use super::reconcile::plan_item_sync;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::evaluation_items::{
    entities::DesiredEvaluationItem, requests::SyncEvaluationItemsRequest,
    responses::SyncEvaluationItemsResponse,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::{validate_desired_items, validate_identifier};

/// 把分组的评价项同步为 `items` 描述的期望状态
///
/// 顺序为 删除 → 更新 → 新建；新建阶段逐行写入，撞上唯一约束的行被跳过且不计数。
pub async fn sync_group(
    storage: &dyn Storage,
    group_id: i64,
    items: Vec<DesiredEvaluationItem>,
    max_items: usize,
) -> Result<SyncEvaluationItemsResponse> {
    validate_identifier("group_id", group_id)?;
    validate_desired_items(&items, max_items)?;

    let existing = storage.list_evaluation_items_by_group(group_id).await?;
    let plan = plan_item_sync(group_id, &existing, &items)?;

    let counts = if plan.is_noop() {
        Default::default()
    } else {
        storage.apply_evaluation_item_plan(group_id, &plan).await?
    };

    let requested_creates = plan.to_create.len() as u64;
    if counts.created < requested_creates {
        info!(
            "Group {}: {} of {} new evaluation items were skipped",
            group_id,
            requested_creates - counts.created,
            requested_creates
        );
    }

    let items = storage.list_evaluation_items_by_group(group_id).await?;
    info!(
        "Group {} synced: created {}, updated {}, deleted {}, unchanged {}",
        group_id, counts.created, counts.updated, counts.deleted, plan.unchanged
    );

    Ok(SyncEvaluationItemsResponse {
        created_count: counts.created,
        updated_count: counts.updated,
        deleted_count: counts.deleted,
        items,
    })
}

pub async fn sync_evaluation_items(
    service: &EvaluationItemService,
    request: &HttpRequest,
    group_id: i64,
    sync_data: SyncEvaluationItemsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let max_items = AppConfig::get().engine.max_sync_items;

    if let Some(user) = RequireJWT::extract_user(request) {
        info!(
            "User {} ({}) syncing {} evaluation items into group {}",
            user.id,
            user.role,
            sync_data.items.len(),
            group_id
        );
    }

    match sync_group(storage.as_ref(), group_id, sync_data.items, max_items).await {
        Ok(result) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            result,
            "Evaluation items synchronized successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
