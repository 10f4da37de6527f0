use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::evaluation_systems::requests::UpdateEvaluationSystemRequest;
use crate::models::owners::requests::RegisterCourseRequest;
use crate::services::OwnerService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<OwnerService> = Lazy::new(OwnerService::new_lazy);

// HTTP处理程序
pub async fn register_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    course_data: web::Json<RegisterCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .register_course(&req, course_id.0, course_data.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn define_course_system(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    system_data: web::Json<UpdateEvaluationSystemRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .define_course_system(&req, course_id.0, system_data.into_inner())
        .await
}

pub async fn edit_course_system(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    system_data: web::Json<UpdateEvaluationSystemRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .edit_course_system(&req, course_id.0, system_data.into_inner())
        .await
}

pub async fn remove_course_system(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.remove_course_system(&req, course_id.0).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                // 开课实例的登记与删除由管理员完成
                web::resource("/{course_id}")
                    .route(
                        web::put()
                            .to(register_course)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    ),
            )
            .service(
                // 课程评价体系流程，教师与管理员可用
                web::resource("/{course_id}/evaluation-system")
                    .route(
                        web::post()
                            .to(define_course_system)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    )
                    .route(
                        web::put()
                            .to(edit_course_system)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(remove_course_system)
                            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles())),
                    ),
            ),
    );
}
