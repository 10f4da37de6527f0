use actix_web::{HttpRequest, HttpResponse, error::InternalError, error::JsonPayloadError};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败（格式错误、未知字段、类型不符）统一返回 400
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload rejected for {}: {}", req.path(), err);

    let (code, message) = match &err {
        JsonPayloadError::ContentType => (
            ErrorCode::BadRequest,
            "Content-Type must be application/json".to_string(),
        ),
        JsonPayloadError::Deserialize(e) => (
            ErrorCode::ValidationFailed,
            format!("Invalid request body: {e}"),
        ),
        _ => (
            ErrorCode::BadRequest,
            format!("Invalid JSON payload: {err}"),
        ),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message));
    InternalError::from_response(err, response).into()
}
