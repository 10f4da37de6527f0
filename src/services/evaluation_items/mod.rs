pub mod list;
pub mod reconcile;
pub mod sync;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluation_items::requests::SyncEvaluationItemsRequest;
use crate::storage::Storage;

pub struct EvaluationItemService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationItemService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出分组内的评价项
    pub async fn list_items(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluation_items(self, request, group_id).await
    }

    // 按期望状态同步分组内的评价项
    pub async fn sync_items(
        &self,
        request: &HttpRequest,
        group_id: i64,
        sync_data: SyncEvaluationItemsRequest,
    ) -> ActixResult<HttpResponse> {
        sync::sync_evaluation_items(self, request, group_id, sync_data).await
    }
}
