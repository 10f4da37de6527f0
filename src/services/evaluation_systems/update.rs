use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationSystemService;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::models::evaluation_systems::{
    entities::{EvaluationGroup, EvaluationSystem},
    requests::UpdateEvaluationSystemRequest,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::validate_evaluation_groups;

/// 整体替换权重分组，只做字段级校验
pub async fn update_system(
    storage: &dyn Storage,
    system_id: i64,
    evaluation_groups: Vec<EvaluationGroup>,
) -> Result<EvaluationSystem> {
    validate_evaluation_groups(&evaluation_groups)?;

    let system = storage
        .update_evaluation_system(system_id, evaluation_groups)
        .await?
        .ok_or_else(|| {
            EvalSysError::system_not_found(format!("Evaluation system {system_id} not found"))
        })?;
    info!(
        "Evaluation system {} updated ({} groups)",
        system.id,
        system.evaluation_groups.len()
    );
    Ok(system)
}

pub async fn update_evaluation_system(
    service: &EvaluationSystemService,
    request: &HttpRequest,
    system_id: i64,
    update_data: UpdateEvaluationSystemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match update_system(storage.as_ref(), system_id, update_data.evaluation_groups).await {
        Ok(system) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            system,
            "Evaluation system updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
