use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationPolicyService;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn delete_policy(storage: &dyn Storage, policy_id: i64) -> Result<()> {
    if !storage.delete_evaluation_policy(policy_id).await? {
        return Err(EvalSysError::policy_not_found(format!(
            "Evaluation policy {policy_id} not found"
        )));
    }
    info!("Evaluation policy {} deleted", policy_id);
    Ok(())
}

pub async fn delete_evaluation_policy(
    service: &EvaluationPolicyService,
    request: &HttpRequest,
    policy_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match delete_policy(storage.as_ref(), policy_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Evaluation policy deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
