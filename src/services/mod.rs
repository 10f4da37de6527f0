pub mod evaluation_items;
pub mod evaluation_policies;
pub mod evaluation_systems;
pub mod owners;

pub use evaluation_items::EvaluationItemService;
pub use evaluation_policies::EvaluationPolicyService;
pub use evaluation_systems::EvaluationSystemService;
pub use owners::OwnerService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::EvalSysError;
use crate::models::{ApiResponse, ErrorCode};

/// 错误响应辅助函数：把领域错误映射为 HTTP 状态码与业务错误码
pub(crate) fn error_response(err: &EvalSysError) -> HttpResponse {
    let message = err.message();
    match err {
        EvalSysError::Validation(_) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, message)),
        // 唯一性冲突按约定返回 400
        EvalSysError::PolicyExists(_) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PolicyExists, message)),
        EvalSysError::SystemExists(_) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::SystemExists, message)),
        EvalSysError::EvaluationItemExists(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::EvaluationItemExists, message),
        ),
        EvalSysError::PolicyViolation(_) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::SystemOutOfPolicy, message)),
        EvalSysError::PolicyNotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::PolicyNotFound, message)),
        EvalSysError::SystemNotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::SystemNotFound, message)),
        EvalSysError::SubjectNotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::SubjectNotFound, message)),
        EvalSysError::CourseNotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::CourseNotFound, message)),
        EvalSysError::Authentication(_) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, message)),
        EvalSysError::Authorization(_) => HttpResponse::Forbidden()
            .json(ApiResponse::error_empty(ErrorCode::Forbidden, message)),
        EvalSysError::BackReference(_) => {
            error!("{}", err);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::BackReferenceFailed,
                message,
            ))
        }
        EvalSysError::DatabaseConfig(_)
        | EvalSysError::DatabaseConnection(_)
        | EvalSysError::DatabaseOperation(_)
        | EvalSysError::Serialization(_) => {
            error!("{}", err);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Internal server error",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_conflicts_map_to_bad_request() {
        for err in [
            EvalSysError::policy_exists("x"),
            EvalSysError::system_exists("x"),
            EvalSysError::evaluation_item_exists("x"),
            EvalSysError::validation("x"),
            EvalSysError::policy_violation("x"),
        ] {
            assert_eq!(error_response(&err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_response(&EvalSysError::course_not_found("x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(&EvalSysError::database_operation("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_response(&EvalSysError::back_reference("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
