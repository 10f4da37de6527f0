use serde::Serialize;

/// 业务错误码
///
/// 数值写入响应体的 `code` 字段，对外保持稳定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    // 评价政策 2xxx
    PolicyNotFound = 2000,
    PolicyExists = 2001,

    // 评价体系 3xxx
    SystemNotFound = 3000,
    SystemExists = 3001,
    SystemOutOfPolicy = 3002,

    // 评价项 4xxx
    EvaluationItemExists = 4001,

    // 归属记录与反向引用 5xxx
    SubjectNotFound = 5000,
    CourseNotFound = 5001,
    BackReferenceFailed = 5002,
}

impl ErrorCode {
    /// 错误码的稳定名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::BadRequest => "BadRequest",
            ErrorCode::ValidationFailed => "ValidationFailed",
            ErrorCode::Unauthorized => "Unauthorized",
            ErrorCode::Forbidden => "Forbidden",
            ErrorCode::NotFound => "NotFound",
            ErrorCode::InternalServerError => "InternalServerError",
            ErrorCode::PolicyNotFound => "PolicyNotFound",
            ErrorCode::PolicyExists => "PolicyExists",
            ErrorCode::SystemNotFound => "SystemNotFound",
            ErrorCode::SystemExists => "SystemExists",
            ErrorCode::SystemOutOfPolicy => "SystemOutOfPolicy",
            ErrorCode::EvaluationItemExists => "EvaluationItemExists",
            ErrorCode::SubjectNotFound => "SubjectNotFound",
            ErrorCode::CourseNotFound => "CourseNotFound",
            ErrorCode::BackReferenceFailed => "BackReferenceFailed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
