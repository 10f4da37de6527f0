//! 科目流程：登记、删除，以及带补偿的评价政策定义与移除

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::OwnerService;
use super::courses::remove_course;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::models::evaluation_policies::{
    entities::PolicyRule, responses::SubjectPolicyResponse,
};
use crate::models::owners::entities::Subject;
use crate::services::error_response;
use crate::services::evaluation_policies::create::create_policy;
use crate::storage::Storage;
use crate::utils::validate::validate_identifier;

pub(crate) fn validate_owner_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EvalSysError::validation("name must not be empty"));
    }
    Ok(())
}

async fn require_subject(storage: &dyn Storage, subject_id: i64) -> Result<Subject> {
    storage
        .get_subject_by_id(subject_id)
        .await?
        .ok_or_else(|| EvalSysError::subject_not_found(format!("Subject {subject_id} not found")))
}

pub async fn register_subject(
    storage: &dyn Storage,
    subject_id: i64,
    name: &str,
) -> Result<Subject> {
    validate_identifier("subject_id", subject_id)?;
    validate_owner_name(name)?;

    let subject = storage.upsert_subject(subject_id, name).await?;
    info!("Subject {} registered", subject.id);
    Ok(subject)
}

/// 删除科目：依次删除其下的开课实例（连同评价体系）与评价政策，最后删除科目
pub async fn remove_subject(storage: &dyn Storage, subject_id: i64) -> Result<()> {
    require_subject(storage, subject_id).await?;

    for course in storage.list_courses().await? {
        if course.subject_id == subject_id {
            remove_course(storage, course.id).await?;
        }
    }

    if let Some(policy) = storage.get_evaluation_policy_by_subject(subject_id).await? {
        storage.delete_evaluation_policy(policy.id).await?;
        info!(
            "Evaluation policy {} deleted together with subject {}",
            policy.id, subject_id
        );
    }

    if !storage.delete_subject(subject_id).await? {
        return Err(EvalSysError::subject_not_found(format!(
            "Subject {subject_id} not found"
        )));
    }
    info!("Subject {} deleted", subject_id);
    Ok(())
}

/// 为科目定义评价政策
///
/// 先创建政策再写入科目的反向引用；第二步失败时删除刚创建的政策。
pub async fn define_subject_policy(
    storage: &dyn Storage,
    subject_id: i64,
    policy_rules: Vec<PolicyRule>,
) -> Result<SubjectPolicyResponse> {
    require_subject(storage, subject_id).await?;
    let policy = create_policy(storage, subject_id, policy_rules).await?;

    let failure = match storage
        .set_subject_policy_ref(subject_id, Some(policy.id))
        .await
    {
        Ok(true) => {
            info!(
                "Subject {} now references evaluation policy {}",
                subject_id, policy.id
            );
            return Ok(SubjectPolicyResponse { subject_id, policy });
        }
        Ok(false) => EvalSysError::subject_not_found(format!(
            "Subject {subject_id} disappeared before its policy could be linked"
        )),
        Err(e) => EvalSysError::back_reference(format!(
            "Failed to link subject {subject_id} to policy {}: {e}",
            policy.id
        )),
    };

    // 补偿：撤销刚创建的政策
    warn!(
        "Compensating: deleting evaluation policy {} after failed back-reference",
        policy.id
    );
    if let Err(e) = storage.delete_evaluation_policy(policy.id).await {
        error!(
            "Compensation failed, evaluation policy {} is orphaned: {}",
            policy.id, e
        );
    }
    Err(failure)
}

/// 移除科目的评价政策：先清除反向引用，再删除政策；删除失败时恢复引用
pub async fn remove_subject_policy(storage: &dyn Storage, subject_id: i64) -> Result<()> {
    require_subject(storage, subject_id).await?;
    let policy = storage
        .get_evaluation_policy_by_subject(subject_id)
        .await?
        .ok_or_else(|| {
            EvalSysError::policy_not_found(format!("No evaluation policy for subject {subject_id}"))
        })?;

    if !storage.set_subject_policy_ref(subject_id, None).await? {
        return Err(EvalSysError::subject_not_found(format!(
            "Subject {subject_id} not found"
        )));
    }

    match storage.delete_evaluation_policy(policy.id).await {
        Ok(true) => {
            info!(
                "Evaluation policy {} removed from subject {}",
                policy.id, subject_id
            );
            Ok(())
        }
        Ok(false) => {
            warn!(
                "Evaluation policy {} was already gone when removing it from subject {}",
                policy.id, subject_id
            );
            Ok(())
        }
        Err(e) => {
            warn!(
                "Compensating: restoring subject {} reference to policy {}",
                subject_id, policy.id
            );
            if let Err(restore_err) = storage
                .set_subject_policy_ref(subject_id, Some(policy.id))
                .await
            {
                error!(
                    "Compensation failed, subject {} lost its policy reference: {}",
                    subject_id, restore_err
                );
            }
            Err(e)
        }
    }
}

pub async fn register_subject_handler(
    service: &OwnerService,
    request: &HttpRequest,
    subject_id: i64,
    name: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match register_subject(storage.as_ref(), subject_id, &name).await {
        Ok(subject) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject registered successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_subject_handler(
    service: &OwnerService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match remove_subject(storage.as_ref(), subject_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Subject deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn define_subject_policy_handler(
    service: &OwnerService,
    request: &HttpRequest,
    subject_id: i64,
    policy_rules: Vec<PolicyRule>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match define_subject_policy(storage.as_ref(), subject_id, policy_rules).await {
        Ok(response) => Ok(HttpResponse::Created().json(ApiResponse::success(
            response,
            "Evaluation policy defined successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn remove_subject_policy_handler(
    service: &OwnerService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match remove_subject_policy(storage.as_ref(), subject_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Evaluation policy removed successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
