//! 开课实例流程：登记、删除，以及经过政策检查的评价体系定义、修改与移除

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::OwnerService;
use super::subjects::validate_owner_name;
use crate::errors::{EvalSysError, Result};
use crate::models::ApiResponse;
use crate::models::evaluation_systems::{
    entities::{EvaluationGroup, EvaluationSystem},
    responses::CourseSystemResponse,
};
use crate::models::owners::entities::{Course, Subject};
use crate::services::error_response;
use crate::services::evaluation_systems::{create::create_system, update::update_system};
use crate::storage::Storage;
use crate::utils::validate::{
    check_groups_against_policy, validate_evaluation_groups, validate_identifier,
};

async fn require_course(storage: &dyn Storage, course_id: i64) -> Result<(Course, Subject)> {
    match storage.get_course_with_subject(course_id).await? {
        Some((course, Some(subject))) => Ok((course, subject)),
        Some((course, None)) => Err(EvalSysError::subject_not_found(format!(
            "Subject {} of course {course_id} is not registered",
            course.subject_id
        ))),
        None => Err(EvalSysError::course_not_found(format!(
            "Course {course_id} not found"
        ))),
    }
}

async fn require_system(storage: &dyn Storage, course_id: i64) -> Result<EvaluationSystem> {
    storage
        .get_evaluation_system_by_course(course_id)
        .await?
        .ok_or_else(|| {
            EvalSysError::system_not_found(format!("No evaluation system for course {course_id}"))
        })
}

/// 字段级校验之后，再按所属科目的政策检查权重分组
async fn check_against_subject_policy(
    storage: &dyn Storage,
    subject: &Subject,
    groups: &[EvaluationGroup],
) -> Result<()> {
    validate_evaluation_groups(groups)?;
    let policy = storage.get_evaluation_policy_by_subject(subject.id).await?;
    check_groups_against_policy(groups, policy.as_ref())
}

pub async fn register_course(
    storage: &dyn Storage,
    course_id: i64,
    subject_id: i64,
    name: &str,
) -> Result<Course> {
    validate_identifier("course_id", course_id)?;
    validate_identifier("subject_id", subject_id)?;
    validate_owner_name(name)?;

    if storage.get_subject_by_id(subject_id).await?.is_none() {
        return Err(EvalSysError::subject_not_found(format!(
            "Subject {subject_id} not found"
        )));
    }

    let course = storage.upsert_course(course_id, subject_id, name).await?;
    info!(
        "Course {} registered under subject {}",
        course.id, course.subject_id
    );
    Ok(course)
}

/// 删除开课实例，先删除其评价体系
pub async fn remove_course(storage: &dyn Storage, course_id: i64) -> Result<()> {
    if storage.get_course_with_subject(course_id).await?.is_none() {
        return Err(EvalSysError::course_not_found(format!(
            "Course {course_id} not found"
        )));
    }

    if let Some(system) = storage.get_evaluation_system_by_course(course_id).await? {
        storage.delete_evaluation_system(system.id).await?;
        info!(
            "Evaluation system {} deleted together with course {}",
            system.id, course_id
        );
    }

    if !storage.delete_course(course_id).await? {
        return Err(EvalSysError::course_not_found(format!(
            "Course {course_id} not found"
        )));
    }
    info!("Course {} deleted", course_id);
    Ok(())
}

/// 为课程定义评价体系
///
/// 通过政策检查后创建体系，再写入课程的反向引用；第二步失败时删除刚创建的体系。
pub async fn define_course_system(
    storage: &dyn Storage,
    course_id: i64,
    evaluation_groups: Vec<EvaluationGroup>,
) -> Result<CourseSystemResponse> {
    let (_, subject) = require_course(storage, course_id).await?;
    check_against_subject_policy(storage, &subject, &evaluation_groups).await?;

    let system = create_system(storage, course_id, evaluation_groups).await?;

    let failure = match storage
        .set_course_system_ref(course_id, Some(system.id))
        .await
    {
        Ok(true) => {
            info!(
                "Course {} now references evaluation system {}",
                course_id, system.id
            );
            return Ok(CourseSystemResponse { course_id, system });
        }
        Ok(false) => EvalSysError::course_not_found(format!(
            "Course {course_id} disappeared before its system could be linked"
        )),
        Err(e) => EvalSysError::back_reference(format!(
            "Failed to link course {course_id} to system {}: {e}",
            system.id
        )),
    };

    // 补偿：撤销刚创建的体系
    warn!(
        "Compensating: deleting evaluation system {} after failed back-reference",
        system.id
    );
    if let Err(e) = storage.delete_evaluation_system(system.id).await {
        error!(
            "Compensation failed, evaluation system {} is orphaned: {}",
            system.id, e
        );
    }
    Err(failure)
}

/// 修改课程的评价体系，同样需要通过政策检查
pub async fn edit_course_system(
    storage: &dyn Storage,
    course_id: i64,
    evaluation_groups: Vec<EvaluationGroup>,
) -> Result<CourseSystemResponse> {
    let (course, subject) = require_course(storage, course_id).await?;
    let current = require_system(storage, course_id).await?;
    check_against_subject_policy(storage, &subject, &evaluation_groups).await?;

    let system = update_system(storage, current.id, evaluation_groups).await?;

    if course.evaluation_system_id != Some(system.id) {
        warn!(
            "Course {} referenced {:?} instead of system {}, relinking",
            course_id, course.evaluation_system_id, system.id
        );
        storage
            .set_course_system_ref(course_id, Some(system.id))
            .await?;
    }

    Ok(CourseSystemResponse { course_id, system })
}

/// 移除课程的评价体系：先清除反向引用，再删除体系；删除失败时恢复引用
pub async fn remove_course_system(storage: &dyn Storage, course_id: i64) -> Result<()> {
    require_course(storage, course_id).await?;
    let system = require_system(storage, course_id).await?;

    if !storage.set_course_system_ref(course_id, None).await? {
        return Err(EvalSysError::course_not_found(format!(
            "Course {course_id} not found"
        )));
    }

    match storage.delete_evaluation_system(system.id).await {
        Ok(true) => {
            info!(
                "Evaluation system {} removed from course {}",
                system.id, course_id
            );
            Ok(())
        }
        Ok(false) => {
            warn!(
                "Evaluation system {} was already gone when removing it from course {}",
                system.id, course_id
            );
            Ok(())
        }
        Err(e) => {
            warn!(
                "Compensating: restoring course {} reference to system {}",
                course_id, system.id
            );
            if let Err(restore_err) = storage
                .set_course_system_ref(course_id, Some(system.id))
                .await
            {
                error!(
                    "Compensation failed, course {} lost its system reference: {}",
                    course_id, restore_err
                );
            }
            Err(e)
        }
    }
}

pub async fn register_course_handler(
    service: &OwnerService,
    request: &HttpRequest,
    course_id: i64,
    subject_id: i64,
    name: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match register_course(storage.as_ref(), course_id, subject_id, &name).await {
        Ok(course) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            course,
            "Course registered successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_course_handler(
    service: &OwnerService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match remove_course(storage.as_ref(), course_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Course deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn define_course_system_handler(
    service: &OwnerService,
    request: &HttpRequest,
    course_id: i64,
    evaluation_groups: Vec<EvaluationGroup>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match define_course_system(storage.as_ref(), course_id, evaluation_groups).await {
        Ok(response) => Ok(HttpResponse::Created().json(ApiResponse::success(
            response,
            "Evaluation system defined successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn edit_course_system_handler(
    service: &OwnerService,
    request: &HttpRequest,
    course_id: i64,
    evaluation_groups: Vec<EvaluationGroup>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match edit_course_system(storage.as_ref(), course_id, evaluation_groups).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Evaluation system updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn remove_course_system_handler(
    service: &OwnerService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match remove_course_system(storage.as_ref(), course_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Evaluation system removed successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
