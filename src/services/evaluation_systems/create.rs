use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationSystemService;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::evaluation_systems::{
    entities::{EvaluationGroup, EvaluationSystem},
    requests::CreateEvaluationSystemRequest,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::{validate_evaluation_groups, validate_identifier};

/// 为课程创建评价体系，每个课程至多一份
///
/// 这里不检查权重合计与科目政策，课程流程在调用前完成该检查。
pub async fn create_system(
    storage: &dyn Storage,
    course_id: i64,
    evaluation_groups: Vec<EvaluationGroup>,
) -> Result<EvaluationSystem> {
    validate_identifier("course_id", course_id)?;
    validate_evaluation_groups(&evaluation_groups)?;

    let system = storage
        .create_evaluation_system(course_id, evaluation_groups)
        .await?;
    info!(
        "Evaluation system {} created for course {}",
        system.id, system.course_id
    );
    Ok(system)
}

pub async fn create_evaluation_system(
    service: &EvaluationSystemService,
    request: &HttpRequest,
    system_data: CreateEvaluationSystemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_system(
        storage.as_ref(),
        system_data.course_id,
        system_data.evaluation_groups,
    )
    .await
    {
        Ok(system) => Ok(HttpResponse::Created().json(ApiResponse::success(
            system,
            "Evaluation system created successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
