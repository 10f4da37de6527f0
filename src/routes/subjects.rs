use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::evaluation_policies::requests::UpdateEvaluationPolicyRequest;
use crate::models::owners::requests::RegisterSubjectRequest;
use crate::services::OwnerService;
use crate::utils::SafeSubjectIdI64;

// 懒加载的全局 SUBJECT_SERVICE 实例
static SUBJECT_SERVICE: Lazy<OwnerService> = Lazy::new(OwnerService::new_lazy);

// HTTP处理程序
pub async fn register_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
    subject_data: web::Json<RegisterSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .register_subject(&req, subject_id.0, subject_data.into_inner())
        .await
}

pub async fn delete_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

pub async fn define_subject_policy(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
    policy_data: web::Json<UpdateEvaluationPolicyRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .define_subject_policy(&req, subject_id.0, policy_data.into_inner())
        .await
}

pub async fn remove_subject_policy(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .remove_subject_policy(&req, subject_id.0)
        .await
}

// 配置路由：归属服务维护科目与其评价政策，全部仅限管理员
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{subject_id}")
                    .route(
                        web::put()
                            .to(register_subject)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    )
                    .route(
                        web::delete()
                            .to(delete_subject)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    ),
            )
            .service(
                web::resource("/{subject_id}/evaluation-policy")
                    .route(
                        web::post()
                            .to(define_subject_policy)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    )
                    .route(
                        web::delete()
                            .to(remove_subject_policy)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    ),
            ),
    );
}
