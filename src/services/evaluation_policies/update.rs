use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationPolicyService;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::models::evaluation_policies::{
    entities::{EvaluationPolicy, PolicyRule},
    requests::UpdateEvaluationPolicyRequest,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::validate_policy_rules;

/// 整体替换规则列表
///
/// 已按旧规则建立的评价体系不会被重新校验。
pub async fn update_policy(
    storage: &dyn Storage,
    policy_id: i64,
    policy_rules: Vec<PolicyRule>,
) -> Result<EvaluationPolicy> {
    validate_policy_rules(&policy_rules)?;

    let policy = storage
        .update_evaluation_policy(policy_id, policy_rules)
        .await?
        .ok_or_else(|| {
            EvalSysError::policy_not_found(format!("Evaluation policy {policy_id} not found"))
        })?;
    info!(
        "Evaluation policy {} updated ({} rules)",
        policy.id,
        policy.policy_rules.len()
    );
    Ok(policy)
}

pub async fn update_evaluation_policy(
    service: &EvaluationPolicyService,
    request: &HttpRequest,
    policy_id: i64,
    update_data: UpdateEvaluationPolicyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match update_policy(storage.as_ref(), policy_id, update_data.policy_rules).await {
        Ok(policy) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            policy,
            "Evaluation policy updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
