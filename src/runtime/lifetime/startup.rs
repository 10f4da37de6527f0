use crate::config::AppConfig;
use crate::services::owners::sweep::repair_back_references;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 启动时巡检科目与开课实例的反向引用
async fn sweep_back_references(storage: &Arc<dyn Storage>) {
    if !AppConfig::get().engine.repair_back_references_on_startup {
        debug!("Back-reference sweep disabled, skipping");
        return;
    }

    match repair_back_references(storage.as_ref()).await {
        Ok(report) if report.total() > 0 => {
            warn!(
                "Back-reference sweep: {} subjects linked, {} cleared; {} courses linked, {} cleared",
                report.subjects_linked,
                report.subjects_cleared,
                report.courses_linked,
                report.courses_cleared
            );
        }
        Ok(_) => debug!("Back-reference sweep found nothing to repair"),
        Err(e) => warn!("Back-reference sweep failed: {}, continuing startup", e),
    }
}

/// 准备服务器启动的上下文
/// 包括 TLS 后端、存储与反向引用巡检
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    sweep_back_references(&storage).await;

    StartupContext { storage }
}
