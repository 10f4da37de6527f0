use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationItemService;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::evaluation_items::responses::EvaluationItemListResponse;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn list_group_items(
    storage: &dyn Storage,
    group_id: i64,
) -> Result<EvaluationItemListResponse> {
    let items = storage.list_evaluation_items_by_group(group_id).await?;
    Ok(EvaluationItemListResponse { items })
}

pub async fn list_evaluation_items(
    service: &EvaluationItemService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match list_group_items(storage.as_ref(), group_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Evaluation items retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
