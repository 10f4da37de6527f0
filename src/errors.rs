//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_evalsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EvalSysError {
            $($variant(String),)*
        }

        impl EvalSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EvalSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EvalSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EvalSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EvalSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EvalSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_evalsys_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    PolicyNotFound("E005", "Evaluation Policy Not Found"),
    Serialization("E006", "Serialization Error"),
    Authentication("E007", "Authentication Error"),
    Authorization("E008", "Authorization Error"),
    PolicyExists("E009", "Evaluation Policy Already Exists"),
    SystemExists("E010", "Evaluation System Already Exists"),
    EvaluationItemExists("E011", "Evaluation Item Already Exists"),
    PolicyViolation("E012", "Evaluation Policy Violation"),
    BackReference("E013", "Back Reference Error"),
    SystemNotFound("E014", "Evaluation System Not Found"),
    SubjectNotFound("E015", "Subject Not Found"),
    CourseNotFound("E016", "Course Not Found"),
}

impl EvalSysError {
    /// 是否为唯一性冲突类错误
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            EvalSysError::PolicyExists(_)
                | EvalSysError::SystemExists(_)
                | EvalSysError::EvaluationItemExists(_)
        )
    }

    /// 是否为资源不存在类错误
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EvalSysError::PolicyNotFound(_)
                | EvalSysError::SystemNotFound(_)
                | EvalSysError::SubjectNotFound(_)
                | EvalSysError::CourseNotFound(_)
        )
    }
}

impl EvalSysError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EvalSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EvalSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EvalSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        EvalSysError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EvalSysError {
    fn from(err: serde_json::Error) -> Self {
        EvalSysError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EvalSysError>;
