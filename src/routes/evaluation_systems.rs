use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::evaluation_systems::requests::{
    CreateEvaluationSystemRequest, UpdateEvaluationSystemRequest,
};
use crate::services::EvaluationSystemService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 EVALUATION_SYSTEM_SERVICE 实例
static EVALUATION_SYSTEM_SERVICE: Lazy<EvaluationSystemService> =
    Lazy::new(EvaluationSystemService::new_lazy);

// HTTP处理程序
pub async fn create_system(
    req: HttpRequest,
    system_data: web::Json<CreateEvaluationSystemRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SYSTEM_SERVICE
        .create_system(&req, system_data.into_inner())
        .await
}

pub async fn get_system_by_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SYSTEM_SERVICE
        .get_system_by_course(&req, course_id.0)
        .await
}

pub async fn get_system(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SYSTEM_SERVICE.get_system(&req, path.0).await
}

pub async fn update_system(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateEvaluationSystemRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SYSTEM_SERVICE
        .update_system(&req, path.0, update_data.into_inner())
        .await
}

pub async fn delete_system(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SYSTEM_SERVICE.delete_system(&req, path.0).await
}

// 配置路由
pub fn configure_evaluation_systems_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluation-systems")
            .wrap(middlewares::RequireJWT)
            .service(
                // 教师与管理员可以创建体系
                web::resource("").route(
                    web::post()
                        .to(create_system)
                        .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                ),
            )
            .service(
                web::resource("/course/{course_id}").route(
                    web::get()
                        .to(get_system_by_course)
                        .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_system)
                            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_system)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_system)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    ),
            ),
    );
}
