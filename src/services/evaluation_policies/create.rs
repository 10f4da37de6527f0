use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationPolicyService;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::evaluation_policies::{
    entities::{EvaluationPolicy, PolicyRule},
    requests::CreateEvaluationPolicyRequest,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::{validate_identifier, validate_policy_rules};

/// 为科目创建评价政策，每个科目至多一份
pub async fn create_policy(
    storage: &dyn Storage,
    subject_id: i64,
    policy_rules: Vec<PolicyRule>,
) -> Result<EvaluationPolicy> {
    validate_identifier("subject_id", subject_id)?;
    validate_policy_rules(&policy_rules)?;

    let policy = storage
        .create_evaluation_policy(subject_id, policy_rules)
        .await?;
    info!(
        "Evaluation policy {} created for subject {}",
        policy.id, policy.subject_id
    );
    Ok(policy)
}

pub async fn create_evaluation_policy(
    service: &EvaluationPolicyService,
    request: &HttpRequest,
    policy_data: CreateEvaluationPolicyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_policy(
        storage.as_ref(),
        policy_data.subject_id,
        policy_data.policy_rules,
    )
    .await
    {
        Ok(policy) => Ok(HttpResponse::Created().json(ApiResponse::success(
            policy,
            "Evaluation policy created successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
