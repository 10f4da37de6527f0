use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationSystemService;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn delete_system(storage: &dyn Storage, system_id: i64) -> Result<()> {
    if !storage.delete_evaluation_system(system_id).await? {
        return Err(EvalSysError::system_not_found(format!(
            "Evaluation system {system_id} not found"
        )));
    }
    info!("Evaluation system {} deleted", system_id);
    Ok(())
}

pub async fn delete_evaluation_system(
    service: &EvaluationSystemService,
    request: &HttpRequest,
    system_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match delete_system(storage.as_ref(), system_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Evaluation system deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
