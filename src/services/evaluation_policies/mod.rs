pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluation_policies::requests::{
    CreateEvaluationPolicyRequest, UpdateEvaluationPolicyRequest,
};
use crate::storage::Storage;

pub struct EvaluationPolicyService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationPolicyService {
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

    // 创建评价政策
    pub async fn create_policy(
        &self,
        request: &HttpRequest,
        policy_data: CreateEvaluationPolicyRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation_policy(self, request, policy_data).await
    }

    // 根据科目 ID 获取评价政策
    pub async fn get_policy_by_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation_policy_by_subject(self, request, subject_id).await
    }

    pub async fn get_policy(
        &self,
        request: &HttpRequest,
        policy_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation_policy(self, request, policy_id).await
    }

    // 整体替换规则列表
    pub async fn update_policy(
        &self,
        request: &HttpRequest,
        policy_id: i64,
        update_data: UpdateEvaluationPolicyRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_evaluation_policy(self, request, policy_id, update_data).await
    }

    pub async fn delete_policy(
        &self,
        request: &HttpRequest,
        policy_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation_policy(self, request, policy_id).await
    }
}
