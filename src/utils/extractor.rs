//! 路径参数提取器
//!
//! 在进入处理函数之前把路径中的 ID 解析为正整数，非法值直接返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, param: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(param).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let message = format!("Invalid path parameter '{param}': must be a positive integer");
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                message.clone(),
            ));
            Err(InternalError::from_response(message, response).into())
        }
    }
}

macro_rules! define_safe_id_extractor {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(parse_positive_id(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIDI64 => "id",
    SafeSubjectIdI64 => "subject_id",
    SafeCourseIdI64 => "course_id",
    SafeGroupIdI64 => "group_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_accepts_positive_id() {
        let req = TestRequest::default()
            .param("group_id", "17")
            .to_http_request();
        let id = SafeGroupIdI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 17);
    }

    #[actix_web::test]
    async fn test_rejects_invalid_ids() {
        for raw in ["0", "-3", "abc", ""] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(SafeIDI64::extract(&req).await.is_err(), "accepted {raw:?}");
        }
    }
}
