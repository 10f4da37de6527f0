pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluation_systems::requests::{
    CreateEvaluationSystemRequest, UpdateEvaluationSystemRequest,
};
use crate::storage::Storage;

pub struct EvaluationSystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationSystemService {
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

    // 创建评价体系
    pub async fn create_system(
        &self,
        request: &HttpRequest,
        system_data: CreateEvaluationSystemRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation_system(self, request, system_data).await
    }

    // 根据课程 ID 获取评价体系
    pub async fn get_system_by_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation_system_by_course(self, request, course_id).await
    }

    pub async fn get_system(
        &self,
        request: &HttpRequest,
        system_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation_system(self, request, system_id).await
    }

    // 整体替换权重分组
    pub async fn update_system(
        &self,
        request: &HttpRequest,
        system_id: i64,
        update_data: UpdateEvaluationSystemRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_evaluation_system(self, request, system_id, update_data).await
    }

    pub async fn delete_system(
        &self,
        request: &HttpRequest,
        system_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation_system(self, request, system_id).await
    }
}
