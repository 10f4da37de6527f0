use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationPolicyService;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::models::evaluation_policies::entities::EvaluationPolicy;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn get_policy_by_subject(
    storage: &dyn Storage,
    subject_id: i64,
) -> Result<EvaluationPolicy> {
    storage
        .get_evaluation_policy_by_subject(subject_id)
        .await?
        .ok_or_else(|| {
            EvalSysError::policy_not_found(format!("No evaluation policy for subject {subject_id}"))
        })
}

pub async fn get_policy(storage: &dyn Storage, policy_id: i64) -> Result<EvaluationPolicy> {
    storage
        .get_evaluation_policy_by_id(policy_id)
        .await?
        .ok_or_else(|| {
            EvalSysError::policy_not_found(format!("Evaluation policy {policy_id} not found"))
        })
}

pub async fn get_evaluation_policy_by_subject(
    service: &EvaluationPolicyService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match get_policy_by_subject(storage.as_ref(), subject_id).await {
        Ok(policy) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            policy,
            "Evaluation policy retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_evaluation_policy(
    service: &EvaluationPolicyService,
    request: &HttpRequest,
    policy_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match get_policy(storage.as_ref(), policy_id).await {
        Ok(policy) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            policy,
            "Evaluation policy retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
