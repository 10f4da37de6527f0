use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::evaluation_policies::requests::{
    CreateEvaluationPolicyRequest, UpdateEvaluationPolicyRequest,
};
use crate::services::EvaluationPolicyService;
use crate::utils::{SafeIDI64, SafeSubjectIdI64};

// 懒加载的全局 EVALUATION_POLICY_SERVICE 实例
static EVALUATION_POLICY_SERVICE: Lazy<EvaluationPolicyService> =
    Lazy::new(EvaluationPolicyService::new_lazy);

// HTTP处理程序
pub async fn create_policy(
    req: HttpRequest,
    policy_data: web::Json<CreateEvaluationPolicyRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_POLICY_SERVICE
        .create_policy(&req, policy_data.into_inner())
        .await
}

pub async fn get_policy_by_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_POLICY_SERVICE
        .get_policy_by_subject(&req, subject_id.0)
        .await
}

pub async fn get_policy(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_POLICY_SERVICE.get_policy(&req, path.0).await
}

pub async fn update_policy(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateEvaluationPolicyRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_POLICY_SERVICE
        .update_policy(&req, path.0, update_data.into_inner())
        .await
}

pub async fn delete_policy(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_POLICY_SERVICE.delete_policy(&req, path.0).await
}

// 配置路由
pub fn configure_evaluation_policies_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluation-policies")
            .wrap(middlewares::RequireJWT)
            .service(
                // 仅管理员可以创建政策
                web::resource("").route(
                    web::post()
                        .to(create_policy)
                        .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                ),
            )
            .service(
                web::resource("/subject/{subject_id}").route(
                    web::get()
                        .to(get_policy_by_subject)
                        .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_policy)
                            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_policy)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    )
                    .route(
                        web::delete()
                            .to(delete_policy)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    ),
            ),
    );
}
