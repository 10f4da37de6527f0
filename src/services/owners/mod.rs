pub mod courses;
pub mod subjects;
pub mod sweep;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluation_policies::requests::UpdateEvaluationPolicyRequest;
use crate::models::evaluation_systems::requests::UpdateEvaluationSystemRequest;
use crate::models::owners::requests::{RegisterCourseRequest, RegisterSubjectRequest};
use crate::storage::Storage;

/// 归属服务调用的科目与开课实例流程
pub struct OwnerService {
    storage: Option<Arc<dyn Storage>>,
}

impl OwnerService {
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

    // 登记科目
    pub async fn register_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        subject_data: RegisterSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::register_subject_handler(self, request, subject_id, subject_data.name).await
    }

    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::delete_subject_handler(self, request, subject_id).await
    }

    // 定义科目评价政策
    pub async fn define_subject_policy(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        policy_data: UpdateEvaluationPolicyRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::define_subject_policy_handler(self, request, subject_id, policy_data.policy_rules)
            .await
    }

    pub async fn remove_subject_policy(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::remove_subject_policy_handler(self, request, subject_id).await
    }

    // 登记开课实例
    pub async fn register_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        course_data: RegisterCourseRequest,
    ) -> ActixResult<HttpResponse> {
        courses::register_course_handler(
            self,
            request,
            course_id,
            course_data.subject_id,
            course_data.name,
        )
        .await
    }

    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        courses::delete_course_handler(self, request, course_id).await
    }

    // 定义课程评价体系
    pub async fn define_course_system(
        &self,
        request: &HttpRequest,
        course_id: i64,
        system_data: UpdateEvaluationSystemRequest,
    ) -> ActixResult<HttpResponse> {
        courses::define_course_system_handler(
            self,
            request,
            course_id,
            system_data.evaluation_groups,
        )
        .await
    }

    // 修改课程评价体系
    pub async fn edit_course_system(
        &self,
        request: &HttpRequest,
        course_id: i64,
        system_data: UpdateEvaluationSystemRequest,
    ) -> ActixResult<HttpResponse> {
        courses::edit_course_system_handler(
            self,
            request,
            course_id,
            system_data.evaluation_groups,
        )
        .await
    }

    pub async fn remove_course_system(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        courses::remove_course_system_handler(self, request, course_id).await
    }
}
