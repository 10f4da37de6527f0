use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationSystemService;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::models::evaluation_systems::entities::EvaluationSystem;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn get_system_by_course(
    storage: &dyn Storage,
    course_id: i64,
) -> Result<EvaluationSystem> {
    storage
        .get_evaluation_system_by_course(course_id)
        .await?
        .ok_or_else(|| {
            EvalSysError::system_not_found(format!("No evaluation system for course {course_id}"))
        })
}

pub async fn get_system(storage: &dyn Storage, system_id: i64) -> Result<EvaluationSystem> {
    storage
        .get_evaluation_system_by_id(system_id)
        .await?
        .ok_or_else(|| {
            EvalSysError::system_not_found(format!("Evaluation system {system_id} not found"))
        })
}

pub async fn get_evaluation_system_by_course(
    service: &EvaluationSystemService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match get_system_by_course(storage.as_ref(), course_id).await {
        Ok(system) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            system,
            "Evaluation system retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_evaluation_system(
    service: &EvaluationSystemService,
    request: &HttpRequest,
    system_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match get_system(storage.as_ref(), system_id).await {
        Ok(system) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            system,
            "Evaluation system retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
