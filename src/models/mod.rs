pub mod auth;
pub mod common;
pub mod evaluation_items;
pub mod evaluation_policies;
pub mod evaluation_systems;
pub mod owners;

pub use common::{ApiResponse, ErrorCode};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
